//! chainview-core
//!
//! The resampling engine behind chainview charts.
//!
//! - `types`: re-exported data model, range policy and error types.
//! - `timeseries`: range resolution, bucket grids, OHLC resampling, smoothing,
//!   bounded rolling means and cadence inference.
//!
//! Everything here is synchronous and free of I/O. All functions except
//! [`RollingMean::admit`] and [`RollingMean::reset`] are pure, so they can be
//! called concurrently on different inputs. A `RollingMean` belongs to a single
//! stream of updates; sharing one across threads needs an outer lock.
#![warn(missing_docs)]

/// Time-series utilities: resolve, bucket, resample, smooth, roll.
pub mod timeseries;
pub mod types;

pub use timeseries::grid::BucketGrid;
pub use timeseries::infer::{estimate_step_seconds, suggest_range};
pub use timeseries::resample::resample;
pub use timeseries::rolling::RollingMean;
pub use timeseries::smooth::{moving_average, smooth_closes};
pub use timeseries::window::{resolve, resolve_at, resolve_range};
pub use types::*;
