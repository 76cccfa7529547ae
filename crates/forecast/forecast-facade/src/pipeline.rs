//! One end-to-end forecast run
//!
//! Loads the trailing window from the selected source, forecasts it and
//! stamps the response with the fit + predict duration.

use std::time::Instant;

use chrono::NaiveDateTime;
use data_core::{open_source, GeneratorConfig, SourceKind};
use data_spi::{now_local, DataError};
use forecast_api::{ForecastResponse, Forecaster, DEFAULT_HORIZON_HOURS};
use forecast_spi::ModelConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Everything a run needs besides the clock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineSettings {
    pub source: SourceKind,
    /// Seed for the synthetic noise; `None` draws from OS entropy
    pub seed: Option<u64>,
    pub horizon: usize,
    pub generator: GeneratorConfig,
    pub model: ModelConfig,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            source: SourceKind::Synthetic,
            seed: None,
            horizon: DEFAULT_HORIZON_HOURS,
            generator: GeneratorConfig::default(),
            model: ModelConfig::default(),
        }
    }
}

/// Failures outside the model, which the forecaster already folds into
/// its response.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Data(#[from] DataError),
}

/// Run the pipeline with the window ending at `now`.
pub fn try_run_at(
    settings: &PipelineSettings,
    now: NaiveDateTime,
) -> Result<ForecastResponse, PipelineError> {
    let mut source = open_source(settings.source, settings.generator.clone(), settings.seed)?;
    let series = source.fetch(now)?;
    info!(source = source.name(), points = series.len(), "loaded series");

    let forecaster = Forecaster::new(settings.model.clone()).with_horizon(settings.horizon);

    let started = Instant::now();
    let mut response = forecaster.run(&series);
    response.record_training_duration(started.elapsed());

    Ok(response)
}

/// Run the pipeline with the window ending at the current local time.
pub fn try_run(settings: &PipelineSettings) -> Result<ForecastResponse, PipelineError> {
    try_run_at(settings, now_local())
}
