//! Time-series utilities shared by the chart pipeline and block-time tracking.
//!
//! Modules include:
//! - `window`: resolve a range token to a concrete window and bucket width
//! - `grid`: build the fixed-width bucket grid observations are folded into
//! - `resample`: fold observations into OHLC candles with gap filling
//! - `smooth`: trailing moving average over an already-bucketed series
//! - `rolling`: bounded FIFO mean for long-running sample streams
//! - `infer`: estimate the cadence of an irregular timestamp stream
/// Bucket grid construction and alignment.
pub mod grid;
/// Cadence inference helpers.
pub mod infer;
/// OHLC resampling with configurable fill policy.
pub mod resample;
/// Bounded rolling mean.
pub mod rolling;
/// Trailing moving averages.
pub mod smooth;
/// Range token resolution.
pub mod window;
