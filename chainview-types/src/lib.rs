//! Data model, range policy table and configuration primitives shared by the
//! chainview crates.
#![warn(missing_docs)]

mod config;
mod error;
mod range;
mod series;

pub use config::{ChainviewConfig, FillPolicy};
pub use error::ChainviewError;
pub use range::{MAX_BUCKETS, RangeSpec, RangeTable, RangeWindow, TimeRange};
pub use series::{BlockHeader, Bucket, Candle, Observation, SmoothedPoint};
