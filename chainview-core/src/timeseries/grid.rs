use crate::{Bucket, ChainviewError, MAX_BUCKETS, Observation, RangeWindow};

/// Contiguous, non-overlapping fixed-width buckets covering `[start, end)`.
///
/// `start` is always a multiple of `width`, so two grids with the same width
/// share bucket boundaries wherever they overlap. Re-querying with a slightly
/// shifted window never re-buckets candles that were already stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketGrid {
    start: i64,
    width: i64,
    count: usize,
}

fn floor_to(ts: i64, width: i64) -> Option<i64> {
    ts.checked_sub(ts.rem_euclid(width))
}

fn out_of_range(start: i64, end: i64, width: i64) -> ChainviewError {
    ChainviewError::InvalidArg(format!(
        "grid [{start}, {end}) with {width}s buckets is out of range"
    ))
}

impl BucketGrid {
    /// Build a grid from explicit bounds.
    ///
    /// `start` is floored to a multiple of `width`; the bucket count is
    /// `ceil((end - start) / width)` so the last bucket may extend past `end`.
    ///
    /// # Errors
    /// Returns `InvalidBucketWidth` if `width <= 0` and `InvalidArg` if
    /// `end <= start`, if the grid needs more than [`MAX_BUCKETS`] buckets, or
    /// if its bounds do not fit in an `i64`.
    pub fn new(start: i64, end: i64, width: i64) -> Result<Self, ChainviewError> {
        if width <= 0 {
            return Err(ChainviewError::InvalidBucketWidth { width });
        }
        if end <= start {
            return Err(ChainviewError::InvalidArg(format!(
                "grid end {end} is not after start {start}"
            )));
        }
        let floored = floor_to(start, width).ok_or_else(|| out_of_range(start, end, width))?;
        let span = end
            .checked_sub(floored)
            .ok_or_else(|| out_of_range(start, end, width))?;
        let count = span.div_euclid(width) + i64::from(span.rem_euclid(width) != 0);
        if count > MAX_BUCKETS as i64 {
            return Err(ChainviewError::InvalidArg(format!(
                "grid of {count} buckets exceeds the limit of {MAX_BUCKETS}"
            )));
        }
        // The last bucket's end must be representable too.
        width
            .checked_mul(count)
            .and_then(|len| floored.checked_add(len))
            .ok_or_else(|| out_of_range(start, end, width))?;
        let count = usize::try_from(count).map_err(|_| out_of_range(start, end, width))?;
        Ok(Self {
            start: floored,
            width,
            count,
        })
    }

    /// Build the grid for a resolved window, anchored on the earliest
    /// observation that lies inside the window.
    ///
    /// The first bucket starts at the largest multiple of the bucket width that
    /// is `<=` the anchor, which may be slightly before `window.start`. The
    /// grid runs to `window.end`. Input order does not matter.
    ///
    /// # Errors
    /// - `InvalidBucketWidth` if the window's width is not positive.
    /// - `InvalidArg` if the window is empty or inverted.
    /// - `EmptyInput` if no finite observation lies inside the window.
    ///
    /// ```
    /// use chainview_core::{BucketGrid, Observation, RangeWindow};
    ///
    /// let window = RangeWindow { start: 0, end: 360, bucket_width: 60 };
    /// let grid = BucketGrid::anchored(&window, &[Observation::new(75, 1.0)]).unwrap();
    /// assert_eq!((grid.start(), grid.end(), grid.len()), (60, 360, 5));
    /// ```
    pub fn anchored(
        window: &RangeWindow,
        observations: &[Observation],
    ) -> Result<Self, ChainviewError> {
        if window.bucket_width <= 0 {
            return Err(ChainviewError::InvalidBucketWidth {
                width: window.bucket_width,
            });
        }
        if window.end <= window.start {
            return Err(ChainviewError::InvalidArg(format!(
                "window end {} is not after start {}",
                window.end, window.start
            )));
        }
        let anchor = observations
            .iter()
            .filter(|o| o.value.is_finite() && window.contains(o.timestamp))
            .map(|o| o.timestamp)
            .min()
            .ok_or(ChainviewError::EmptyInput)?;
        Self::new(anchor, window.end, window.bucket_width)
    }

    /// Start of the first bucket.
    #[must_use]
    pub const fn start(&self) -> i64 {
        self.start
    }

    /// End of the last bucket (exclusive).
    #[must_use]
    pub const fn end(&self) -> i64 {
        self.start + self.width * self.count as i64
    }

    /// Bucket width in seconds.
    #[must_use]
    pub const fn width(&self) -> i64 {
        self.width
    }

    /// Number of buckets.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Always false for a grid produced by the constructors.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The `i`-th bucket, if in range.
    #[must_use]
    pub const fn bucket(&self, i: usize) -> Option<Bucket> {
        if i >= self.count {
            return None;
        }
        let start = self.start + self.width * i as i64;
        Some(Bucket {
            start,
            end: start + self.width,
        })
    }

    /// Buckets in time order.
    pub fn iter(&self) -> impl Iterator<Item = Bucket> + '_ {
        (0..self.count).filter_map(|i| self.bucket(i))
    }

    /// Whether `ts` falls inside `[start, end)`.
    #[must_use]
    pub const fn contains(&self, ts: i64) -> bool {
        self.start <= ts && ts < self.end()
    }

    /// Index of the bucket containing `ts`: `floor((ts - start) / width)`.
    #[must_use]
    pub fn index_of(&self, ts: i64) -> Option<usize> {
        if !self.contains(ts) {
            return None;
        }
        usize::try_from((ts - self.start).div_euclid(self.width)).ok()
    }
}
