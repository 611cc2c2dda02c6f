//! Configuration types for the chainview engine.

use serde::{Deserialize, Serialize};

use crate::RangeTable;

/// What to emit for a bucket that received no observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FillPolicy {
    /// Repeat the previous candle's close as a flat candle. Leading empty
    /// buckets with no predecessor are still omitted.
    #[default]
    CarryForward,
    /// Omit empty buckets from the output.
    Skip,
}

/// Global configuration for the `Chainview` engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainviewConfig {
    /// Range-to-window/bucket policy.
    pub ranges: RangeTable,
    /// Gap handling for empty buckets.
    pub fill_policy: FillPolicy,
    /// Trailing window applied to candle closes; `None` disables smoothing.
    pub smoothing_window: Option<usize>,
    /// Number of recent block-time deltas averaged by block-time trackers.
    pub block_time_capacity: usize,
}

impl Default for ChainviewConfig {
    fn default() -> Self {
        Self {
            ranges: RangeTable::default(),
            fill_policy: FillPolicy::CarryForward,
            smoothing_window: None,
            block_time_capacity: 100,
        }
    }
}
