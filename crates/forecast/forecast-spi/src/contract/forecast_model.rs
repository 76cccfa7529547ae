//! Trait for fit/predict forecasting models

use chrono::NaiveDateTime;
use data_spi::Observation;

use crate::error::Result;
use crate::model::Prediction;

/// A model that learns from a timestamped history and projects it onto
/// arbitrary future timestamps.
pub trait ForecastModel {
    /// Fit the model to chronologically ordered observations
    fn fit(&mut self, history: &[Observation]) -> Result<()>;

    /// Predict one point (with bounds) per requested timestamp
    fn predict(&self, timestamps: &[NaiveDateTime]) -> Result<Vec<Prediction>>;

    /// Check if the model has been fitted
    fn is_fitted(&self) -> bool;
}
