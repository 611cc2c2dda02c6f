use crate::timeseries::grid::BucketGrid;
use crate::{Candle, FillPolicy, Observation};

/// Running OHLC plus the activity series folded alongside it.
///
/// Volume and swap count live in the same accumulator as the prices so a
/// bucket's activity can never be attributed to another bucket's candle.
#[derive(Debug, Clone, Copy)]
struct BucketAgg {
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
    swaps: u64,
}

impl BucketAgg {
    fn start(o: &Observation) -> Self {
        Self {
            open: o.value,
            high: o.value,
            low: o.value,
            close: o.value,
            volume: 0.0,
            swaps: 0,
        }
        .with_activity(o)
    }

    fn with_activity(mut self, o: &Observation) -> Self {
        if o.volume.is_finite() {
            self.volume += o.volume;
        }
        self.swaps += 1;
        self
    }

    fn fold(&mut self, o: &Observation) {
        self.high = self.high.max(o.value);
        self.low = self.low.min(o.value);
        self.close = o.value;
        *self = self.with_activity(o);
    }
}

/// Fold observations into one candle per bucket of `grid`.
///
/// - Each observation lands in bucket `floor((ts - grid.start) / width)`;
///   observations outside the grid are ignored.
/// - Open = first value in timestamp order, close = last, high/low = max/min.
///   Equal timestamps keep their input order.
/// - Volume = sum of finite observation volumes; swap count = number of
///   observations in the bucket.
/// - Non-finite values are dropped before folding.
/// - Empty buckets follow `fill`: `CarryForward` emits a flat candle at the
///   previous close (`filled = true`, zero activity); `Skip` omits them.
///   Leading empty buckets are always omitted.
///
/// The result depends only on the multiset of observations (modulo the order
/// of equal timestamps), never on arrival order.
///
/// ```
/// use chainview_core::{resample, BucketGrid, FillPolicy, Observation};
///
/// let obs = [
///     Observation::new(0, 10.0),
///     Observation::new(30, 12.0),
///     Observation::new(45, 8.0),
///     Observation::new(61, 9.0),
/// ];
/// let grid = BucketGrid::new(0, 120, 60).unwrap();
/// let candles = resample(&obs, &grid, FillPolicy::CarryForward);
/// assert_eq!(candles.len(), 2);
/// assert_eq!((candles[0].open, candles[0].high, candles[0].low, candles[0].close), (10.0, 12.0, 8.0, 8.0));
/// assert_eq!((candles[1].open, candles[1].close), (9.0, 9.0));
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "chainview_core::resample",
        skip(observations, grid),
        fields(
            observations = observations.len(),
            width = grid.width(),
            buckets = grid.len(),
        ),
    )
)]
#[must_use]
pub fn resample(observations: &[Observation], grid: &BucketGrid, fill: FillPolicy) -> Vec<Candle> {
    let mut ordered: Vec<(usize, &Observation)> = observations
        .iter()
        .filter(|o| o.value.is_finite())
        .filter_map(|o| grid.index_of(o.timestamp).map(|idx| (idx, o)))
        .collect();

    #[cfg(feature = "tracing")]
    {
        let dropped = observations.len() - ordered.len();
        if dropped > 0 {
            tracing::debug!(dropped, "ignoring non-finite or out-of-grid observations");
        }
    }

    // Stable: equal timestamps keep input order.
    ordered.sort_by_key(|(_, o)| o.timestamp);

    let mut slots: Vec<Option<BucketAgg>> = vec![None; grid.len()];
    for (idx, o) in ordered {
        slots[idx] = Some(match slots[idx] {
            Some(mut agg) => {
                agg.fold(o);
                agg
            }
            None => BucketAgg::start(o),
        });
    }

    let mut out: Vec<Candle> = Vec::with_capacity(slots.len());
    let mut prev_close: Option<f64> = None;
    for (bucket, slot) in grid.iter().zip(slots) {
        match (slot, fill, prev_close) {
            (Some(agg), _, _) => {
                prev_close = Some(agg.close);
                out.push(Candle {
                    bucket,
                    open: agg.open,
                    high: agg.high,
                    low: agg.low,
                    close: agg.close,
                    volume: agg.volume,
                    swap_count: agg.swaps,
                    filled: false,
                });
            }
            (None, FillPolicy::CarryForward, Some(close)) => out.push(Candle::flat(bucket, close)),
            (None, FillPolicy::CarryForward | FillPolicy::Skip, _) => {}
        }
    }
    out
}
