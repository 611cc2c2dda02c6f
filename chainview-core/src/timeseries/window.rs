use chrono::{DateTime, Utc};

use crate::{ChainviewError, RangeTable, RangeWindow, TimeRange};

/// Resolve a range token against the policy table.
///
/// The window is `[now - window_secs, now)` and the bucket width comes from the
/// matching table entry. `now` is always supplied by the caller; nothing here
/// reads the clock.
///
/// # Errors
/// Returns `InvalidRange` if the token is unknown or the table has no entry
/// for it, and `InvalidBucketWidth` if the entry's width is not positive.
///
/// ```
/// use chainview_core::{resolve, RangeTable};
///
/// let w = resolve(&RangeTable::default(), "24H", 100_000).unwrap();
/// assert_eq!((w.start, w.end, w.bucket_width), (13_600, 100_000, 900));
/// assert!(resolve(&RangeTable::default(), "2W", 100_000).is_err());
/// ```
pub fn resolve(table: &RangeTable, token: &str, now: i64) -> Result<RangeWindow, ChainviewError> {
    let range: TimeRange = token.parse()?;
    resolve_range(table, range, now)
}

/// Resolve an already-parsed range.
///
/// # Errors
/// Returns `InvalidRange` if the table has no entry for `range`, and
/// `InvalidBucketWidth` if the entry's width is not positive.
pub fn resolve_range(
    table: &RangeTable,
    range: TimeRange,
    now: i64,
) -> Result<RangeWindow, ChainviewError> {
    let spec = table
        .spec(range)
        .ok_or_else(|| ChainviewError::invalid_range(range.token()))?;
    if spec.bucket_width <= 0 {
        return Err(ChainviewError::InvalidBucketWidth {
            width: spec.bucket_width,
        });
    }
    Ok(RangeWindow {
        start: now.saturating_sub(spec.window_secs),
        end: now,
        bucket_width: spec.bucket_width,
    })
}

/// Resolve a range token relative to a wall-clock instant.
///
/// # Errors
/// Same as [`resolve`].
pub fn resolve_at(
    table: &RangeTable,
    token: &str,
    now: DateTime<Utc>,
) -> Result<RangeWindow, ChainviewError> {
    resolve(table, token, now.timestamp())
}
