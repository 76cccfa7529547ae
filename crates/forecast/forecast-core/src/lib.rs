//! Forecast Core
//!
//! Core implementation of the additive forecasting model: a linear trend
//! plus Fourier seasonality fitted by penalised least squares, with
//! prediction intervals from the residual spread.

pub mod additive;
pub mod confidence;
pub mod linalg;
pub mod seasonality;

// Re-export SPI traits for implementations
pub use forecast_spi::{
    ForecastError, ForecastModel, ModelConfig, Observation, Prediction, Result, SeasonalityMode,
};

// Re-export main types
pub use additive::AdditiveModel;
pub use confidence::{z_score, IntervalBand};
pub use linalg::CholeskyFactor;
pub use seasonality::{FourierSeasonality, DAILY, WEEKLY, YEARLY};
