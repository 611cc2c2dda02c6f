use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the chainview workspace.
///
/// Configuration problems are fatal. An unknown range token is a bad request
/// and is neither fatal nor recoverable; an empty observation set is the only
/// condition callers are expected to recover from.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChainviewError {
    /// The range token is not one of the known tokens, or the range table has no entry for it.
    #[error("invalid range: {token}")]
    InvalidRange {
        /// The token as supplied by the caller.
        token: String,
    },

    /// There is no observation to anchor the bucket grid.
    #[error("empty input: no observations to anchor the bucket grid")]
    EmptyInput,

    /// A rolling statistic was configured with a non-positive capacity.
    #[error("invalid capacity: {capacity}")]
    InvalidCapacity {
        /// The rejected capacity.
        capacity: usize,
    },

    /// A bucket grid was configured with a non-positive bucket width.
    #[error("invalid bucket width: {width}s")]
    InvalidBucketWidth {
        /// The rejected width in seconds.
        width: i64,
    },

    /// A moving-average window of zero points.
    #[error("invalid smoothing window: {window}")]
    InvalidWindow {
        /// The rejected window length.
        window: usize,
    },

    /// Any other malformed argument (e.g. an inverted time window).
    #[error("invalid argument: {0}")]
    InvalidArg(String),
}

impl ChainviewError {
    /// Helper: build an `InvalidRange` error for a token.
    pub fn invalid_range(token: impl Into<String>) -> Self {
        Self::InvalidRange {
            token: token.into(),
        }
    }

    /// Returns true if the caller should render a "no data" state rather than fail.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::EmptyInput)
    }

    /// Returns true if the error indicates misconfiguration that must not be retried.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::InvalidCapacity { .. }
                | Self::InvalidBucketWidth { .. }
                | Self::InvalidWindow { .. }
                | Self::InvalidArg(_)
        )
    }
}
