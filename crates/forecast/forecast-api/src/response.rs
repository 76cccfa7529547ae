//! Forecast response records
//!
//! The JSON document printed by the binaries is either
//! `{success: true, historical, forecast, model_info}` or
//! `{success: false, error, generated_at}`.

use std::time::Duration;

use data_spi::{format_timestamp, now_local, Observation};
use forecast_spi::Prediction;
use serde::{Deserialize, Serialize};

/// One projected hour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub timestamp: String,
    pub predicted: f64,
    pub lower: f64,
    pub upper: f64,
}

impl From<&Prediction> for ForecastPoint {
    fn from(p: &Prediction) -> Self {
        Self {
            timestamp: format_timestamp(&p.timestamp),
            predicted: p.yhat,
            lower: p.yhat_lower,
            upper: p.yhat_upper,
        }
    }
}

/// One observed hour shown alongside the forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    pub timestamp: String,
    pub actual: f64,
}

impl From<&Observation> for HistoricalPoint {
    fn from(o: &Observation) -> Self {
        Self {
            timestamp: format_timestamp(&o.timestamp),
            actual: o.value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub training_samples: usize,
    pub forecast_horizon_hours: usize,
    pub generated_at: String,
    /// Wall time of fit + predict, filled in by the caller
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_duration_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSuccess {
    pub success: bool,
    pub historical: Vec<HistoricalPoint>,
    pub forecast: Vec<ForecastPoint>,
    pub model_info: ModelInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastFailure {
    pub success: bool,
    pub error: String,
    pub generated_at: String,
}

/// Outcome of one forecast run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ForecastResponse {
    Success(ForecastSuccess),
    Failure(ForecastFailure),
}

impl ForecastSuccess {
    pub fn new(
        historical: Vec<HistoricalPoint>,
        forecast: Vec<ForecastPoint>,
        model_info: ModelInfo,
    ) -> Self {
        Self {
            success: true,
            historical,
            forecast,
            model_info,
        }
    }
}

impl ForecastResponse {
    /// Failure stamped with the current time.
    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure(ForecastFailure {
            success: false,
            error: error.into(),
            generated_at: format_timestamp(&now_local()),
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn model_info(&self) -> Option<&ModelInfo> {
        match self {
            Self::Success(s) => Some(&s.model_info),
            Self::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failure(f) => Some(&f.error),
        }
    }

    /// Attach the measured fit + predict time. No-op on failures.
    pub fn record_training_duration(&mut self, elapsed: Duration) {
        if let Self::Success(s) = self {
            s.model_info.training_duration_ms = Some(elapsed.as_millis() as u64);
        }
    }

    /// Pretty-printed JSON document.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<ForecastSuccess> for ForecastResponse {
    fn from(s: ForecastSuccess) -> Self {
        Self::Success(s)
    }
}
