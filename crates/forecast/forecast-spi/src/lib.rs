//! Forecast Service Provider Interface
//!
//! Defines the fit/predict contract every forecasting model implements, the
//! model configuration record and the forecast error type.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::ForecastModel;
pub use error::{ForecastError, Result};
pub use model::{ModelConfig, Prediction, SeasonalityMode};

pub use data_spi::Observation;
