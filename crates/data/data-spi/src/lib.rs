//! Data Service Provider Interface
//!
//! Defines the observation model, the data source contract and the error
//! types shared by every energy data provider.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::DataSource;
pub use error::{DataError, Result};
pub use model::{format_timestamp, now_local, Observation, Series};
