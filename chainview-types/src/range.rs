//! Named chart ranges and the policy table that maps them to windows and bucket widths.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ChainviewError;

/// A named chart range as selected in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TimeRange {
    /// Last hour.
    #[serde(rename = "1H")]
    H1,
    /// Last 24 hours.
    #[serde(rename = "24H")]
    H24,
    /// Last 7 days.
    #[serde(rename = "7D")]
    D7,
    /// Last 30 days.
    #[serde(rename = "30D")]
    D30,
}

impl TimeRange {
    /// All ranges, shortest first.
    pub const ALL: [Self; 4] = [Self::H1, Self::H24, Self::D7, Self::D30];

    /// Canonical token, as accepted by [`FromStr`].
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::H1 => "1H",
            Self::H24 => "24H",
            Self::D7 => "7D",
            Self::D30 => "30D",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for TimeRange {
    type Err = ChainviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.token().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ChainviewError::invalid_range(s))
    }
}

/// Upper bound on the number of buckets in one grid.
///
/// Grids and range tables that would need more are rejected with `InvalidArg`.
pub const MAX_BUCKETS: usize = 100_000;

/// Policy entry: how far back a range looks and how wide its buckets are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSpec {
    /// Range this entry configures.
    pub range: TimeRange,
    /// Length of the window ending at "now", in seconds.
    pub window_secs: i64,
    /// Bucket width in seconds.
    pub bucket_width: i64,
}

impl RangeSpec {
    /// Build a policy entry.
    #[must_use]
    pub const fn new(range: TimeRange, window_secs: i64, bucket_width: i64) -> Self {
        Self {
            range,
            window_secs,
            bucket_width,
        }
    }
}

/// Adjustable range-to-bucket policy table.
///
/// The default table:
///
/// | Range | Window     | Bucket width |
/// |-------|------------|--------------|
/// | 1H    | 3 600 s    | 60 s         |
/// | 24H   | 86 400 s   | 900 s        |
/// | 7D    | 604 800 s  | 3 600 s      |
/// | 30D   | 2 592 000 s| 14 400 s     |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeTable {
    specs: Vec<RangeSpec>,
}

impl Default for RangeTable {
    fn default() -> Self {
        Self {
            specs: vec![
                RangeSpec::new(TimeRange::H1, 3_600, 60),
                RangeSpec::new(TimeRange::H24, 86_400, 900),
                RangeSpec::new(TimeRange::D7, 604_800, 3_600),
                RangeSpec::new(TimeRange::D30, 2_592_000, 14_400),
            ],
        }
    }
}

impl RangeTable {
    /// A table with no entries; every lookup fails until specs are added.
    #[must_use]
    pub const fn empty() -> Self {
        Self { specs: Vec::new() }
    }

    /// Replace the entry for `spec.range`, or add it if absent.
    #[must_use]
    pub fn with_spec(mut self, spec: RangeSpec) -> Self {
        if let Some(existing) = self.specs.iter_mut().find(|s| s.range == spec.range) {
            *existing = spec;
        } else {
            self.specs.push(spec);
        }
        self
    }

    /// Look up the entry for a range.
    #[must_use]
    pub fn spec(&self, range: TimeRange) -> Option<&RangeSpec> {
        self.specs.iter().find(|s| s.range == range)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &RangeSpec> {
        self.specs.iter()
    }

    /// Check every entry has a positive window and bucket width, fits in
    /// [`MAX_BUCKETS`] buckets, and that no range appears twice.
    ///
    /// The bucket budget leaves room for the partial buckets at either end of
    /// a grid anchored inside the window.
    ///
    /// # Errors
    /// Returns `InvalidBucketWidth` for a non-positive width and `InvalidArg`
    /// for a non-positive window, an oversized window or a duplicate range.
    pub fn validate(&self) -> Result<(), ChainviewError> {
        for (i, s) in self.specs.iter().enumerate() {
            if s.bucket_width <= 0 {
                return Err(ChainviewError::InvalidBucketWidth {
                    width: s.bucket_width,
                });
            }
            if s.window_secs <= 0 {
                return Err(ChainviewError::InvalidArg(format!(
                    "range {} has non-positive window {}s",
                    s.range, s.window_secs
                )));
            }
            let buckets = (s.window_secs / s.bucket_width).saturating_add(2);
            if buckets > MAX_BUCKETS as i64 {
                return Err(ChainviewError::InvalidArg(format!(
                    "range {} needs more than {MAX_BUCKETS} buckets of {}s",
                    s.range, s.bucket_width
                )));
            }
            if self.specs[..i].iter().any(|prev| prev.range == s.range) {
                return Err(ChainviewError::InvalidArg(format!(
                    "range {} is configured more than once",
                    s.range
                )));
            }
        }
        Ok(())
    }
}

/// Concrete `[start, end)` window and bucket width produced by resolving a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeWindow {
    /// Inclusive start, seconds since epoch.
    pub start: i64,
    /// Exclusive end, seconds since epoch.
    pub end: i64,
    /// Bucket width in seconds.
    pub bucket_width: i64,
}

impl RangeWindow {
    /// Whether `ts` lies inside `[start, end)`.
    #[must_use]
    pub const fn contains(&self, ts: i64) -> bool {
        self.start <= ts && ts < self.end
    }
}
