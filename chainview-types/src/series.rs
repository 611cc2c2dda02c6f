//! Observation and derived-series records exchanged with data sources and renderers.

use serde::{Deserialize, Serialize};

/// A single raw data point: a trade price, a pool balance, a block timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
    /// Observed value.
    pub value: f64,
    /// Quantity traded with this observation; `0.0` when the source has none.
    #[serde(default)]
    pub volume: f64,
}

impl Observation {
    /// Create an observation without volume.
    #[must_use]
    pub const fn new(timestamp: i64, value: f64) -> Self {
        Self {
            timestamp,
            value,
            volume: 0.0,
        }
    }

    /// Attach a traded quantity to this observation.
    #[must_use]
    pub const fn with_volume(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }
}

/// Half-open time interval `[start, end)` in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Bucket {
    /// Inclusive start.
    pub start: i64,
    /// Exclusive end.
    pub end: i64,
}

impl Bucket {
    /// Width of the bucket in seconds.
    #[must_use]
    pub const fn width(&self) -> i64 {
        self.end - self.start
    }

    /// Whether `ts` falls inside `[start, end)`.
    #[must_use]
    pub const fn contains(&self, ts: i64) -> bool {
        self.start <= ts && ts < self.end
    }
}

/// OHLC summary of one bucket, together with the volume and swap count folded
/// from the same observations.
///
/// Candles are only ever emitted for buckets that either received observations
/// or could carry forward a previous close, so the price fields are always set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// The bucket this candle summarizes.
    pub bucket: Bucket,
    /// First value in timestamp order.
    pub open: f64,
    /// Maximum value.
    pub high: f64,
    /// Minimum value.
    pub low: f64,
    /// Last value in timestamp order.
    pub close: f64,
    /// Sum of observation volumes in the bucket.
    pub volume: f64,
    /// Number of observations folded into the bucket.
    pub swap_count: u64,
    /// True when the bucket had no observations and the candle was carried forward.
    pub filled: bool,
}

impl Candle {
    /// Candle with all four prices equal to `price` and no activity.
    #[must_use]
    pub const fn flat(bucket: Bucket, price: f64) -> Self {
        Self {
            bucket,
            open: price,
            high: price,
            low: price,
            close: price,
            volume: 0.0,
            swap_count: 0,
            filled: true,
        }
    }

    /// Bucket start, used as the candle's x coordinate by renderers.
    #[must_use]
    pub const fn timestamp(&self) -> i64 {
        self.bucket.start
    }
}

/// One point of a smoothed series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SmoothedPoint {
    /// Timestamp of the source point (bucket start for candles).
    pub timestamp: i64,
    /// Mean of the trailing window ending at this point.
    pub value: f64,
}

/// Minimal block header needed for block-time tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    /// Block height / round number.
    pub round: u64,
    /// Block timestamp, seconds since epoch.
    pub timestamp: i64,
}
