//! Chainview turns raw indexer records into chart-ready series.
//!
//! Overview
//! - Resolves a named range ("1H", "24H", "7D", "30D") to a window and bucket width.
//! - Anchors a fixed-width bucket grid on the first observation so bucket
//!   boundaries stay put when the dashboard refreshes with a later "now".
//! - Folds prices into OHLC candles, with volume and swap count folded in the
//!   same pass, and carries the last close across empty buckets.
//! - Optionally smooths candle closes with a trailing moving average.
//! - Tracks a bounded rolling average of block times.
//!
//! Key behaviors and trade-offs
//! - Fill policy: `CarryForward` keeps charts continuous but draws flat candles
//!   where nothing traded; `Skip` leaves visible gaps.
//! - An empty observation set is not an error at this level: `chart` returns an
//!   empty series so the caller can render a "no data" state.
//! - Everything is synchronous. Allocations are bounded by the input size and
//!   by [`MAX_BUCKETS`] per grid; `build` rejects range tables that would
//!   exceed it. The engine is immutable after `build`, so one instance can
//!   serve many threads; `BlockTimeTracker` is single-writer.
//!
//! Examples
//! ```rust
//! use chainview::{Chainview, FillPolicy, Observation};
//!
//! let engine = Chainview::builder()
//!     .fill_policy(FillPolicy::CarryForward)
//!     .smoothing_window(3)
//!     .build()?;
//!
//! let swaps = vec![
//!     Observation::new(1_700_000_010, 0.251).with_volume(120.0),
//!     Observation::new(1_700_000_075, 0.254).with_volume(40.0),
//! ];
//! let series = engine.chart(&swaps, "1H", 1_700_000_400)?;
//! assert_eq!(series.candles.len(), series.smoothed.len());
//! # Ok::<(), chainview::ChainviewError>(())
//! ```
//!
//! Block-time averaging:
//! ```rust
//! use chainview::{BlockHeader, Chainview};
//!
//! let engine = Chainview::builder().block_time_capacity(10).build()?;
//! let mut tracker = engine.block_time_tracker()?;
//! assert_eq!(tracker.average_block_time(), 0.0);
//! tracker.observe(BlockHeader { round: 1, timestamp: 100 });
//! tracker.observe(BlockHeader { round: 2, timestamp: 104 });
//! assert_eq!(tracker.average_block_time(), 4.0);
//! # Ok::<(), chainview::ChainviewError>(())
//! ```
#![warn(missing_docs)]

mod blocks;
mod chart;
pub(crate) mod core;

pub use blocks::BlockTimeTracker;
pub use chart::ChartSeries;
pub use core::{Chainview, ChainviewBuilder};

// Re-export core types for convenience
pub use chainview_core::{
    BlockHeader, Bucket, BucketGrid, Candle, ChainviewConfig, ChainviewError, FillPolicy,
    MAX_BUCKETS, Observation, RangeSpec, RangeTable, RangeWindow, RollingMean, SmoothedPoint,
    TimeRange, estimate_step_seconds, moving_average, resample, resolve, smooth_closes,
};
