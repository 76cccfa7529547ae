//! Forecast Facade
//!
//! High-level API for energy forecasting. Re-exports the public types of the
//! data and forecast stacks and wires them into a single [`pipeline`] run.

pub mod pipeline;

pub use pipeline::{try_run, try_run_at, PipelineError, PipelineSettings};

// Re-export everything from API (which includes SPI and core)
pub use forecast_api::*;

// Explicit re-exports for documentation
pub use forecast_api::prelude;

// Re-export core modules for direct access
pub use forecast_core::{additive, confidence, linalg, seasonality};

// Re-export data providers
pub use data_core::{
    daily_component, open_source, weekly_component, GeneratorConfig, SourceKind,
    SyntheticEnergyGenerator, SyntheticSource, MAX_WINDOW_DAYS,
};
pub use data_spi::{format_timestamp, now_local, DataError, DataSource, Series};
