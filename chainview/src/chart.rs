use chainview_core::{
    BucketGrid, Candle, ChainviewError, Observation, RangeWindow, SmoothedPoint, TimeRange,
    resample, resolve_range, smooth_closes,
};

use crate::Chainview;

/// Output of one chart refresh, ready for the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    /// The range that was resolved.
    pub range: TimeRange,
    /// Resolved window and bucket width.
    pub window: RangeWindow,
    /// One candle per non-skipped bucket, in time order.
    pub candles: Vec<Candle>,
    /// Smoothed closes, one per candle; empty when smoothing is disabled.
    pub smoothed: Vec<SmoothedPoint>,
}

impl ChartSeries {
    fn empty(range: TimeRange, window: RangeWindow) -> Self {
        Self {
            range,
            window,
            candles: Vec::new(),
            smoothed: Vec::new(),
        }
    }

    /// True when there was nothing to chart in the window.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }
}

impl Chainview {
    /// Build the candle series for a range token.
    ///
    /// Resolves the token to `[now - window, now)`, anchors the bucket grid on
    /// the earliest observation inside that window, resamples every
    /// observation that falls in the grid, and smooths the closes when a
    /// smoothing window is configured. Observations may arrive in any order.
    ///
    /// # Errors
    /// Returns `InvalidRange` for an unknown token or one missing from the
    /// range table. An empty window is not an error: the series comes back
    /// empty.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "chainview::chart",
            skip(self, observations),
            fields(token = token, now = now, observations = observations.len()),
        )
    )]
    pub fn chart(
        &self,
        observations: &[Observation],
        token: &str,
        now: i64,
    ) -> Result<ChartSeries, ChainviewError> {
        let range: TimeRange = token.parse()?;
        self.chart_range(observations, range, now)
    }

    /// Same as [`Chainview::chart`] for an already-parsed range.
    ///
    /// # Errors
    /// Returns `InvalidRange` if the range table has no entry for `range`.
    pub fn chart_range(
        &self,
        observations: &[Observation],
        range: TimeRange,
        now: i64,
    ) -> Result<ChartSeries, ChainviewError> {
        let window = resolve_range(&self.cfg.ranges, range, now)?;
        let grid = match BucketGrid::anchored(&window, observations) {
            Ok(grid) => grid,
            Err(e) if e.is_recoverable() => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    range = %range,
                    "no observations in window; returning empty series"
                );
                return Ok(ChartSeries::empty(range, window));
            }
            Err(e) => return Err(e),
        };

        let candles = resample(observations, &grid, self.cfg.fill_policy);
        let smoothed = match self.cfg.smoothing_window {
            Some(w) => smooth_closes(&candles, w)?,
            None => Vec::new(),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            range = %range,
            grid_start = grid.start(),
            buckets = grid.len(),
            candles = candles.len(),
            "chart series built"
        );

        Ok(ChartSeries {
            range,
            window,
            candles,
            smoothed,
        })
    }
}
