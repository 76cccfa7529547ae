//! Data Source Core
//!
//! Implementations for energy data sources: the synthetic consumption
//! generator and the source selection used by the binaries.

pub mod source;
pub mod synthetic;

pub use source::{open_source, SourceKind};
pub use synthetic::{
    daily_component, weekly_component, GeneratorConfig, SyntheticEnergyGenerator, SyntheticSource,
    MAX_WINDOW_DAYS,
};

// Re-export SPI types for implementations
pub use data_spi::{format_timestamp, now_local, DataError, DataSource, Observation, Result, Series};
