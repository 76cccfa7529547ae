//! Prediction intervals
//!
//! Bounds are `yhat ± z · σ · sqrt(1 + h)`, where `σ` is the residual
//! standard deviation of the fit and `h` the leverage of the prediction row.
//! Leverage grows as the forecast moves away from the training data, so the
//! band widens with the horizon.

use serde::{Deserialize, Serialize};

/// Get z-score for a given confidence level
pub fn z_score(confidence_level: f64) -> f64 {
    match confidence_level {
        x if x >= 0.99 => 2.576,
        x if x >= 0.95 => 1.96,
        x if x >= 0.90 => 1.645,
        x if x >= 0.80 => 1.282,
        x if x >= 0.50 => 0.674,
        _ => 1.96, // default to 95%
    }
}

/// Residual standard deviation with a degrees-of-freedom correction.
///
/// Falls back to the plain mean square when there are no spare degrees of
/// freedom (fewer observations than parameters).
pub fn residual_std(residuals: &[f64], n_params: usize) -> f64 {
    if residuals.is_empty() {
        return 0.0;
    }
    let ss: f64 = residuals.iter().map(|r| r * r).sum();
    let dof = if residuals.len() > n_params {
        residuals.len() - n_params
    } else {
        residuals.len()
    };
    (ss / dof as f64).sqrt()
}

/// Interval generator for one fitted model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalBand {
    /// Coverage requested (e.g., 0.80 for 80%)
    pub confidence_level: f64,
    /// Residual standard deviation
    pub sigma: f64,
}

impl IntervalBand {
    pub fn new(confidence_level: f64, sigma: f64) -> Self {
        Self {
            confidence_level,
            sigma,
        }
    }

    /// Half-width of the band for a row with the given leverage.
    pub fn half_width(&self, leverage: f64) -> f64 {
        z_score(self.confidence_level) * self.sigma * (1.0 + leverage.max(0.0)).sqrt()
    }

    /// `(lower, upper)` around `yhat`.
    pub fn bounds(&self, yhat: f64, leverage: f64) -> (f64, f64) {
        let half = self.half_width(leverage);
        (yhat - half, yhat + half)
    }
}
