//! Re-export of the shared data model from `chainview-types`.
// Downstream crates can depend on `chainview-core` only

pub use chainview_types::{
    BlockHeader, Bucket, Candle, ChainviewConfig, ChainviewError, FillPolicy, MAX_BUCKETS,
    Observation, RangeSpec, RangeTable, RangeWindow, SmoothedPoint, TimeRange,
};
