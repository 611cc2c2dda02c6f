use crate::{RangeTable, TimeRange};

/// Estimate a representative step (in seconds) from positive adjacent
/// timestamp deltas.
///
/// Prefer the mode (most frequent positive delta); if there is no unique mode,
/// return the lower median.
///
/// Unique mode (60s):
///
/// ```
/// use chainview_core::estimate_step_seconds;
///
/// // Adjacent deltas: 60,60,60,120,180  => unique mode is 60
/// assert_eq!(estimate_step_seconds(&[0, 60, 120, 180, 300, 480]), Some(60));
/// ```
///
/// No unique mode, fall back to the lower median (60s):
///
/// ```
/// use chainview_core::estimate_step_seconds;
///
/// // Adjacent deltas: 60,60,120,120  => lower median is 60
/// assert_eq!(estimate_step_seconds(&[0, 60, 120, 240, 360]), Some(60));
/// ```
///
/// The input order does not matter and duplicates are ignored. Returns `None`
/// if fewer than two distinct timestamps are present.
#[must_use]
pub fn estimate_step_seconds(timestamps: &[i64]) -> Option<i64> {
    if timestamps.len() < 2 {
        return None;
    }
    let mut ts = timestamps.to_vec();
    ts.sort_unstable();

    let mut deltas: Vec<i64> = ts
        .windows(2)
        .map(|w| w[1] - w[0])
        .filter(|&d| d > 0)
        .collect();
    if deltas.is_empty() {
        return None;
    }
    deltas.sort_unstable();

    let mut best_delta = deltas[0];
    let mut best_count = 0usize;
    let mut num_best = 0usize;

    let mut cur_delta = deltas[0];
    let mut cur_count = 0usize;
    for &d in &deltas {
        if d == cur_delta {
            cur_count += 1;
            continue;
        }
        tally(cur_delta, cur_count, &mut best_delta, &mut best_count, &mut num_best);
        cur_delta = d;
        cur_count = 1;
    }
    tally(cur_delta, cur_count, &mut best_delta, &mut best_count, &mut num_best);

    if num_best == 1 {
        return Some(best_delta);
    }

    // Lower median
    let mid = deltas.len() / 2;
    if deltas.len() % 2 == 1 {
        Some(deltas[mid])
    } else {
        Some(deltas[mid - 1])
    }
}

fn tally(
    delta: i64,
    count: usize,
    best_delta: &mut i64,
    best_count: &mut usize,
    num_best: &mut usize,
) {
    if count > *best_count {
        *best_count = count;
        *best_delta = delta;
        *num_best = 1;
    } else if count == *best_count {
        *num_best += 1;
    }
}

/// Pick the shortest configured range whose bucket width is at least the
/// stream's estimated step, so a sparse stream is not charted as mostly
/// carried-forward candles.
///
/// Falls back to the configured range with the widest buckets when the stream
/// is sparser than every entry. Returns `None` when the step cannot be
/// estimated or the table is empty.
#[must_use]
pub fn suggest_range(timestamps: &[i64], table: &RangeTable) -> Option<TimeRange> {
    let step = estimate_step_seconds(timestamps)?;
    table
        .iter()
        .filter(|s| s.bucket_width >= step)
        .min_by_key(|s| (s.window_secs, s.bucket_width))
        .or_else(|| table.iter().max_by_key(|s| s.bucket_width))
        .map(|s| s.range)
}
