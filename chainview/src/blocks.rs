use chainview_core::{BlockHeader, ChainviewError, RollingMean};

/// Rolling average of the time between blocks.
///
/// Feed it every newly observed block header. The first header only primes
/// the tracker; each later header with a higher round admits the mean
/// per-round interval since the previous one, so a skipped stretch of rounds
/// does not count as one long block.
#[derive(Debug, Clone)]
pub struct BlockTimeTracker {
    stat: RollingMean,
    last: Option<BlockHeader>,
}

impl BlockTimeTracker {
    /// Create a tracker averaging the last `capacity` intervals.
    ///
    /// # Errors
    /// Returns `InvalidCapacity` if `capacity == 0`.
    pub fn new(capacity: usize) -> Result<Self, ChainviewError> {
        Ok(Self {
            stat: RollingMean::new(capacity)?,
            last: None,
        })
    }

    /// Record a block header and return the interval admitted, if any.
    ///
    /// Headers whose round is not past the last seen round (re-deliveries,
    /// reorg echoes) are ignored, as are headers whose timestamp runs
    /// backwards.
    pub fn observe(&mut self, header: BlockHeader) -> Option<f64> {
        let Some(prev) = self.last else {
            self.last = Some(header);
            return None;
        };
        if header.round <= prev.round {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                round = header.round,
                last_round = prev.round,
                "ignoring already-seen round"
            );
            return None;
        }
        if header.timestamp < prev.timestamp {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                round = header.round,
                timestamp = header.timestamp,
                last_timestamp = prev.timestamp,
                "ignoring block with timestamp before its predecessor"
            );
            return None;
        }

        let rounds = (header.round - prev.round) as f64;
        let delta = (header.timestamp - prev.timestamp) as f64 / rounds;
        self.stat.admit(delta);
        self.last = Some(header);
        Some(delta)
    }

    /// Mean block time in seconds; `0.0` until two headers have been seen.
    #[must_use]
    pub fn average_block_time(&self) -> f64 {
        self.stat.mean()
    }

    /// Number of intervals in the average. Renderers show "calculating…"
    /// while this is zero.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.stat.len()
    }

    /// Round of the last accepted header.
    #[must_use]
    pub fn last_round(&self) -> Option<u64> {
        self.last.map(|h| h.round)
    }

    /// Forget every interval and the last header.
    pub fn reset(&mut self) {
        self.stat.reset();
        self.last = None;
    }
}
