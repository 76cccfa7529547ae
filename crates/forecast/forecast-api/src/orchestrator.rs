//! Forecast orchestration
//!
//! Fits a model on the full series, projects `horizon` hours past the last
//! observation and shapes the result for display. Model errors never escape
//! [`Forecaster::run`]; they become a failure response.

use chrono::{NaiveDateTime, TimeDelta};
use data_spi::{format_timestamp, now_local, Observation};
use forecast_core::AdditiveModel;
use forecast_spi::{ForecastError, ForecastModel, ModelConfig, Result};
use tracing::{info, warn};

use crate::response::{ForecastPoint, ForecastResponse, ForecastSuccess, HistoricalPoint, ModelInfo};

/// Two days of hourly steps
pub const DEFAULT_HORIZON_HOURS: usize = 48;

/// Trailing observations returned for display continuity (three days)
pub const HISTORY_DISPLAY_HOURS: usize = 72;

/// `horizon` hourly timestamps strictly after `last`.
pub fn future_timestamps(last: NaiveDateTime, horizon: usize) -> Vec<NaiveDateTime> {
    (1..=horizon as i64)
        .map(|h| last + TimeDelta::hours(h))
        .collect()
}

/// Runs one forecast with a fixed model configuration and horizon
#[derive(Debug, Clone)]
pub struct Forecaster {
    config: ModelConfig,
    horizon: usize,
}

impl Default for Forecaster {
    fn default() -> Self {
        Self::new(ModelConfig::default())
    }
}

impl Forecaster {
    pub fn new(config: ModelConfig) -> Self {
        Self {
            config,
            horizon: DEFAULT_HORIZON_HOURS,
        }
    }

    pub fn with_horizon(mut self, horizon: usize) -> Self {
        self.horizon = horizon;
        self
    }

    pub fn horizon(&self) -> usize {
        self.horizon
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Fit `model` on `series` and shape its projection.
    pub fn forecast<M>(&self, model: &mut M, series: &[Observation]) -> Result<ForecastSuccess>
    where
        M: ForecastModel + ?Sized,
    {
        if self.horizon == 0 {
            return Err(ForecastError::invalid_parameter(
                "horizon",
                "must be at least 1 hour",
            ));
        }

        model.fit(series)?;

        let last = series
            .last()
            .ok_or(ForecastError::InsufficientData {
                required: 2,
                actual: 0,
            })?
            .timestamp;
        let predictions = model.predict(&future_timestamps(last, self.horizon))?;

        let skip = predictions.len().saturating_sub(self.horizon);
        let forecast: Vec<ForecastPoint> = predictions[skip..].iter().map(Into::into).collect();

        let skip = series.len().saturating_sub(HISTORY_DISPLAY_HOURS);
        let historical: Vec<HistoricalPoint> = series[skip..].iter().map(Into::into).collect();

        Ok(ForecastSuccess::new(
            historical,
            forecast,
            ModelInfo {
                training_samples: series.len(),
                forecast_horizon_hours: self.horizon,
                generated_at: format_timestamp(&now_local()),
                training_duration_ms: None,
            },
        ))
    }

    /// Like [`forecast`](Self::forecast) but folds any error into a failure response.
    pub fn run_with<M>(&self, model: &mut M, series: &[Observation]) -> ForecastResponse
    where
        M: ForecastModel + ?Sized,
    {
        match self.forecast(model, series) {
            Ok(success) => {
                info!(
                    training_samples = success.model_info.training_samples,
                    horizon = self.horizon,
                    "forecast completed"
                );
                success.into()
            }
            Err(e) => {
                warn!(error = %e, "forecast failed");
                ForecastResponse::failure(e.to_string())
            }
        }
    }

    /// Forecast with the additive model built from this forecaster's config.
    pub fn run(&self, series: &[Observation]) -> ForecastResponse {
        match AdditiveModel::new(self.config.clone()) {
            Ok(mut model) => self.run_with(&mut model, series),
            Err(e) => {
                warn!(error = %e, "invalid model configuration");
                ForecastResponse::failure(e.to_string())
            }
        }
    }
}
