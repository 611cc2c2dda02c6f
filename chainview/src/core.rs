use chainview_core::{
    ChainviewConfig, ChainviewError, FillPolicy, Observation, RangeSpec, RangeTable, TimeRange,
    moving_average, suggest_range,
};

use crate::blocks::BlockTimeTracker;

/// Resampling engine configured once and reused for every chart refresh.
#[derive(Debug, Clone)]
pub struct Chainview {
    pub(crate) cfg: ChainviewConfig,
}

/// Builder for constructing a `Chainview` engine with custom configuration.
#[derive(Debug, Clone)]
pub struct ChainviewBuilder {
    cfg: ChainviewConfig,
}

impl Default for ChainviewBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ChainviewBuilder {
    /// Create a new builder with the default range table, carry-forward
    /// filling, no smoothing and a 100-sample block-time window.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cfg: ChainviewConfig::default(),
        }
    }

    /// Replace the whole configuration, e.g. one deserialized from a file.
    #[must_use]
    pub fn config(mut self, cfg: ChainviewConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Replace the range-to-bucket policy table.
    #[must_use]
    pub fn ranges(mut self, table: RangeTable) -> Self {
        self.cfg.ranges = table;
        self
    }

    /// Override or add a single range policy entry.
    #[must_use]
    pub fn range_spec(mut self, spec: RangeSpec) -> Self {
        self.cfg.ranges = self.cfg.ranges.with_spec(spec);
        self
    }

    /// Select how empty buckets are rendered.
    ///
    /// Behavior and trade-offs:
    /// - `CarryForward` repeats the previous close so lines and candles stay
    ///   continuous; flat candles mark buckets with no trades.
    /// - `Skip` only returns buckets that saw activity; charts show gaps.
    #[must_use]
    pub const fn fill_policy(mut self, policy: FillPolicy) -> Self {
        self.cfg.fill_policy = policy;
        self
    }

    /// Smooth candle closes with a trailing moving average of `window` points.
    #[must_use]
    pub const fn smoothing_window(mut self, window: usize) -> Self {
        self.cfg.smoothing_window = Some(window);
        self
    }

    /// Disable smoothing (the default).
    #[must_use]
    pub const fn no_smoothing(mut self) -> Self {
        self.cfg.smoothing_window = None;
        self
    }

    /// Number of recent block intervals averaged by block-time trackers.
    #[must_use]
    pub const fn block_time_capacity(mut self, capacity: usize) -> Self {
        self.cfg.block_time_capacity = capacity;
        self
    }

    /// Build the engine.
    ///
    /// # Errors
    /// - `InvalidBucketWidth` / `InvalidArg` if a range entry has a non-positive
    ///   width or window, needs more than `MAX_BUCKETS` buckets, or repeats a
    ///   range already in the table.
    /// - `InvalidWindow` if the smoothing window is zero.
    /// - `InvalidCapacity` if the block-time capacity is zero.
    pub fn build(self) -> Result<Chainview, ChainviewError> {
        self.cfg.ranges.validate()?;
        if let Some(window) = self.cfg.smoothing_window
            && window == 0
        {
            return Err(ChainviewError::InvalidWindow { window });
        }
        if self.cfg.block_time_capacity == 0 {
            return Err(ChainviewError::InvalidCapacity { capacity: 0 });
        }
        Ok(Chainview { cfg: self.cfg })
    }
}

impl Chainview {
    /// Start building a new `Chainview` instance.
    ///
    /// ```rust
    /// use chainview::{Chainview, FillPolicy, RangeSpec, TimeRange};
    ///
    /// let engine = Chainview::builder()
    ///     .range_spec(RangeSpec::new(TimeRange::H24, 86_400, 300))
    ///     .fill_policy(FillPolicy::Skip)
    ///     .build()?;
    /// assert_eq!(engine.config().fill_policy, FillPolicy::Skip);
    /// # Ok::<(), chainview::ChainviewError>(())
    /// ```
    #[must_use]
    pub fn builder() -> ChainviewBuilder {
        ChainviewBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &ChainviewConfig {
        &self.cfg
    }

    /// Apply the configured smoother to any scalar series (pool balances,
    /// fee totals). Without a configured window the series is returned as is.
    ///
    /// # Errors
    /// Only fails if the configured window is zero, which `build` rejects.
    pub fn smooth(&self, values: &[f64]) -> Result<Vec<f64>, ChainviewError> {
        moving_average(values, self.cfg.smoothing_window.unwrap_or(1))
    }

    /// Create a block-time tracker sized by the configured capacity.
    ///
    /// # Errors
    /// Only fails if the configured capacity is zero, which `build` rejects.
    pub fn block_time_tracker(&self) -> Result<BlockTimeTracker, ChainviewError> {
        BlockTimeTracker::new(self.cfg.block_time_capacity)
    }

    /// Suggest a default range for a stream based on its observed cadence.
    #[must_use]
    pub fn suggest_range(&self, observations: &[Observation]) -> Option<TimeRange> {
        let ts: Vec<i64> = observations.iter().map(|o| o.timestamp).collect();
        suggest_range(&ts, &self.cfg.ranges)
    }
}
