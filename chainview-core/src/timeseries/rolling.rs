use std::collections::VecDeque;

use crate::ChainviewError;

/// Fixed-capacity FIFO of recent samples with an O(1) mean.
///
/// Admitting a sample past capacity evicts the oldest one first. The mean is
/// kept from a running sum; every `capacity` admits the sum is recomputed from
/// the stored samples so rounding error from add/subtract pairs cannot build up
/// over a long-running session. A non-finite sum, or the eviction of a
/// non-finite sample, triggers the recompute immediately.
///
/// The statistic is owned by exactly one update stream. Wrap it in a mutex or
/// feed it from a single-writer channel if several tasks produce samples.
#[derive(Debug, Clone)]
pub struct RollingMean {
    samples: VecDeque<f64>,
    capacity: usize,
    sum: f64,
    since_resync: usize,
}

impl RollingMean {
    /// Create an empty statistic holding at most `capacity` samples.
    ///
    /// # Errors
    /// Returns `InvalidCapacity` if `capacity == 0`.
    pub fn new(capacity: usize) -> Result<Self, ChainviewError> {
        if capacity == 0 {
            return Err(ChainviewError::InvalidCapacity { capacity });
        }
        Ok(Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
            sum: 0.0,
            since_resync: 0,
        })
    }

    /// Append a sample, evicting the oldest one if capacity is exceeded.
    ///
    /// Returns the evicted sample, if any.
    pub fn admit(&mut self, sample: f64) -> Option<f64> {
        let evicted = if self.samples.len() == self.capacity {
            self.samples.pop_front()
        } else {
            None
        };
        if let Some(old) = evicted {
            self.sum -= old;
        }
        self.samples.push_back(sample);
        self.sum += sample;

        self.since_resync += 1;
        let poisoned = evicted.is_some_and(|old| !old.is_finite()) || !self.sum.is_finite();
        if poisoned || self.since_resync >= self.capacity {
            self.sum = self.samples.iter().sum();
            self.since_resync = 0;
        }
        evicted
    }

    /// Arithmetic mean of the current samples; `0.0` before the first admit.
    #[must_use]
    pub fn mean(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.sum / self.samples.len() as f64
    }

    /// Drop every sample; the mean reverts to `0.0`.
    pub fn reset(&mut self) {
        self.samples.clear();
        self.sum = 0.0;
        self.since_resync = 0;
    }

    /// Number of samples currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True before the first admit and after `reset`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Maximum number of samples.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// True once the window is full.
    #[must_use]
    pub fn is_warm(&self) -> bool {
        self.samples.len() == self.capacity
    }

    /// Samples, oldest first.
    pub fn samples(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }
}
