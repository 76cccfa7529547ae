//! Forecast Consumer API
//!
//! Orchestration of a single forecast run and the response types it
//! produces.
//!
//! This crate provides:
//! - [`Forecaster`], which fits a model on a series and shapes its output
//! - The success/failure response records serialized by the binaries
//! - Re-exports from SPI and core for convenience

pub mod orchestrator;
pub mod response;

pub use orchestrator::{
    future_timestamps, Forecaster, DEFAULT_HORIZON_HOURS, HISTORY_DISPLAY_HOURS,
};
pub use response::{
    ForecastFailure, ForecastPoint, ForecastResponse, ForecastSuccess, HistoricalPoint, ModelInfo,
};

// Re-export from core
pub use forecast_core::AdditiveModel;

// Re-export traits from SPI
pub use forecast_spi::{
    ForecastError, ForecastModel, ModelConfig, Observation, Prediction, Result, SeasonalityMode,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Forecaster, ForecastPoint, ForecastResponse, HistoricalPoint, ModelInfo,
        DEFAULT_HORIZON_HOURS,
    };
    pub use forecast_core::AdditiveModel;
    pub use forecast_spi::{
        ForecastError, ForecastModel, ModelConfig, Observation, Prediction, Result,
        SeasonalityMode,
    };
}
