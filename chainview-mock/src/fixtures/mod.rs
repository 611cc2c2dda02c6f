pub mod blocks;
pub mod pools;
pub mod swaps;

use chrono::NaiveDateTime;

/// Parse a `YYYY-MM-DD HH:MM:SS` UTC fixture time.
fn ts(s: &str) -> i64 {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|dt| dt.and_utc().timestamp())
        .expect("valid fixture timestamp")
}
