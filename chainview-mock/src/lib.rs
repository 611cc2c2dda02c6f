//! Deterministic fixture data standing in for an indexer.
//!
//! Nothing here touches the network or the clock: every stream is a pure
//! function of its arguments, so tests and demos are reproducible.
#![warn(missing_docs)]

use chainview_core::{BlockHeader, ChainviewError, Observation};

mod fixtures;

/// Fixture source keyed by pair, pool or chain name.
pub struct MockSource;

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    /// Create the source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn unknown(kind: &str, key: &str) -> ChainviewError {
        ChainviewError::InvalidArg(format!("no {kind} fixture for {key}"))
    }

    /// Hand-written swap trades for a trading pair.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an unknown pair.
    pub fn swaps(&self, pair: &str) -> Result<Vec<Observation>, ChainviewError> {
        fixtures::swaps::by_pair(pair).ok_or_else(|| Self::unknown("swap", pair))
    }

    /// Hourly pool balance snapshots with a missing stretch in the middle.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an unknown pool.
    pub fn pool_balances(&self, pool: &str) -> Result<Vec<Observation>, ChainviewError> {
        fixtures::pools::by_pool(pool).ok_or_else(|| Self::unknown("pool", pool))
    }

    /// Block headers for a chain, starting at `first_round`.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an unknown chain.
    pub fn blocks(
        &self,
        chain: &str,
        first_round: u64,
        count: usize,
    ) -> Result<Vec<BlockHeader>, ChainviewError> {
        fixtures::blocks::by_chain(chain, first_round, count)
            .ok_or_else(|| Self::unknown("block", chain))
    }

    /// A long synthetic swap stream: `count` trades spaced by a repeating
    /// irregular pattern averaging `mean_gap` seconds, with a bounded
    /// oscillating price around `base_price`.
    #[must_use]
    pub fn swap_stream(
        &self,
        start: i64,
        count: usize,
        mean_gap: i64,
        base_price: f64,
    ) -> Vec<Observation> {
        fixtures::swaps::stream(start, count, mean_gap, base_price)
    }
}
