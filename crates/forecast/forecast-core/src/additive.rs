//! Additive trend + seasonality model
//!
//! Fits `y(t) = k + m·t + s(t)` where `t` is time scaled to `[0, 1]` over the
//! training span and `s(t)` is a sum of Fourier seasonalities (daily, weekly,
//! yearly as configured). In multiplicative mode the seasonal part scales the
//! trend instead: `y(t) = (k + m·t)·(1 + s(t))`.
//!
//! Targets are divided by `max|y|` before fitting so the seasonality penalty
//! `1 / prior_scale²` acts on a unit-free scale.
//!
//! ## Example
//!
//! ```rust
//! use chrono::{NaiveDate, TimeDelta};
//! use forecast_core::{AdditiveModel, ForecastModel, ModelConfig, Observation};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let history: Vec<Observation> = (0..24 * 14)
//!     .map(|i| Observation::new(start + TimeDelta::hours(i), 50.0 + (i % 24) as f64))
//!     .collect();
//!
//! let mut model = AdditiveModel::new(ModelConfig::default()).unwrap();
//! model.fit(&history).unwrap();
//!
//! let last = history.last().unwrap().timestamp;
//! let future: Vec<_> = (1..=3).map(|h| last + TimeDelta::hours(h)).collect();
//! let predictions = model.predict(&future).unwrap();
//! assert_eq!(predictions.len(), 3);
//! assert!(predictions.iter().all(|p| p.is_ordered()));
//! ```

use chrono::NaiveDateTime;
use forecast_spi::{
    ForecastError, ForecastModel, ModelConfig, Observation, Prediction, Result, SeasonalityMode,
};
use tracing::debug;

use crate::confidence::{residual_std, IntervalBand};
use crate::linalg::{CholeskyFactor, NormalEquations};
use crate::seasonality::{days_since_epoch, enabled_seasonalities, FourierSeasonality};

/// Intercept and slope
const TREND_COLUMNS: usize = 2;

/// Keeps the trend block positive definite without shrinking it noticeably
const TREND_PENALTY: f64 = 1e-8;

/// Additive (or multiplicative) seasonal regression model
#[derive(Debug, Clone)]
pub struct AdditiveModel {
    config: ModelConfig,
    seasonalities: Vec<FourierSeasonality>,
    state: Option<FittedState>,
}

#[derive(Debug, Clone)]
struct FittedState {
    start: NaiveDateTime,
    span_ms: f64,
    y_scale: f64,
    trend: [f64; TREND_COLUMNS],
    seasonal: Vec<f64>,
    factor: CholeskyFactor,
    band: IntervalBand,
    n_observations: usize,
}

impl FittedState {
    fn scaled_time(&self, ts: &NaiveDateTime) -> f64 {
        (*ts - self.start).num_milliseconds() as f64 / self.span_ms
    }

    fn level(&self, t: f64) -> f64 {
        self.trend[0] + self.trend[1] * t
    }
}

impl AdditiveModel {
    /// Create a model; fails on an invalid configuration.
    pub fn new(config: ModelConfig) -> Result<Self> {
        config.validate()?;
        let seasonalities = enabled_seasonalities(&config);
        Ok(Self {
            config,
            seasonalities,
            state: None,
        })
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Seasonal components in use
    pub fn seasonalities(&self) -> &[FourierSeasonality] {
        &self.seasonalities
    }

    /// Total number of regression coefficients
    pub fn n_params(&self) -> usize {
        TREND_COLUMNS + self.seasonal_width()
    }

    /// Number of observations used in fitting
    pub fn n_observations(&self) -> usize {
        self.state.as_ref().map_or(0, |s| s.n_observations)
    }

    /// Residual standard deviation of the fit, in the units of the data
    pub fn residual_std(&self) -> Option<f64> {
        self.state.as_ref().map(|s| s.band.sigma * s.y_scale)
    }

    /// Trend value (without seasonality) at `ts`, in the units of the data
    pub fn trend_at(&self, ts: &NaiveDateTime) -> Result<f64> {
        let state = self.state.as_ref().ok_or(ForecastError::NotFitted)?;
        Ok(state.level(state.scaled_time(ts)) * state.y_scale)
    }

    fn seasonal_width(&self) -> usize {
        self.seasonalities.iter().map(|s| s.width()).sum()
    }

    fn seasonal_features(&self, ts: &NaiveDateTime) -> Vec<f64> {
        let days = days_since_epoch(ts);
        let mut out = Vec::with_capacity(self.seasonal_width());
        for seasonality in &self.seasonalities {
            seasonality.extend_features(days, &mut out);
        }
        out
    }

    fn penalties(&self) -> Vec<f64> {
        let seasonal_penalty = 1.0 / self.config.seasonality_prior_scale.powi(2);
        let mut penalties = vec![TREND_PENALTY; TREND_COLUMNS];
        penalties.extend(std::iter::repeat(seasonal_penalty).take(self.seasonal_width()));
        penalties
    }

    /// Multiplier applied to the seasonal regressors of a row.
    fn seasonal_weight(&self, level: f64) -> f64 {
        match self.config.seasonality_mode {
            SeasonalityMode::Additive => 1.0,
            SeasonalityMode::Multiplicative => level,
        }
    }

    fn combine(&self, level: f64, seasonal: f64) -> f64 {
        match self.config.seasonality_mode {
            SeasonalityMode::Additive => level + seasonal,
            SeasonalityMode::Multiplicative => level * (1.0 + seasonal),
        }
    }

    /// Fit trend and seasonal coefficients on scaled data.
    fn solve_coefficients(
        &self,
        times: &[f64],
        ys: &[f64],
        features: &[Vec<f64>],
    ) -> Result<([f64; TREND_COLUMNS], Vec<f64>, CholeskyFactor)> {
        let penalties = self.penalties();

        match self.config.seasonality_mode {
            SeasonalityMode::Additive => {
                let mut eq = NormalEquations::new(self.n_params());
                for ((&t, &y), f) in times.iter().zip(ys).zip(features) {
                    eq.add_row(&design_row(t, f, 1.0), y);
                }
                eq.add_ridge(&penalties);

                let (beta, factor) = eq.solve()?;
                Ok(([beta[0], beta[1]], beta[TREND_COLUMNS..].to_vec(), factor))
            }
            SeasonalityMode::Multiplicative => {
                let mut trend_eq = NormalEquations::new(TREND_COLUMNS);
                for (&t, &y) in times.iter().zip(ys) {
                    trend_eq.add_row(&[1.0, t], y);
                }
                trend_eq.add_ridge(&penalties[..TREND_COLUMNS]);
                let (trend_beta, _) = trend_eq.solve()?;
                let trend = [trend_beta[0], trend_beta[1]];

                // y - level = level * s(t), linear in the seasonal coefficients
                let mut seasonal_eq = NormalEquations::new(self.seasonal_width());
                let mut full_eq = NormalEquations::new(self.n_params());
                for ((&t, &y), f) in times.iter().zip(ys).zip(features) {
                    let level = trend[0] + trend[1] * t;
                    let weighted: Vec<f64> = f.iter().map(|v| v * level).collect();
                    seasonal_eq.add_row(&weighted, y - level);
                    full_eq.add_row(&design_row(t, f, level), y);
                }
                seasonal_eq.add_ridge(&penalties[TREND_COLUMNS..]);
                full_eq.add_ridge(&penalties);

                let (seasonal, _) = seasonal_eq.solve()?;
                Ok((trend, seasonal, full_eq.factor()?))
            }
        }
    }
}

/// `[1, t, w·f₁, …, w·fₖ]`
fn design_row(t: f64, features: &[f64], weight: f64) -> Vec<f64> {
    let mut row = Vec::with_capacity(TREND_COLUMNS + features.len());
    row.push(1.0);
    row.push(t);
    row.extend(features.iter().map(|f| f * weight));
    row
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn validate_history(history: &[Observation]) -> Result<()> {
    if history.len() < 2 {
        return Err(ForecastError::InsufficientData {
            required: 2,
            actual: history.len(),
        });
    }

    if let Some(i) = history.iter().position(|o| !o.value.is_finite()) {
        return Err(ForecastError::InvalidData(format!(
            "non-finite value at index {i}"
        )));
    }

    if let Some(i) = history
        .windows(2)
        .position(|w| w[1].timestamp < w[0].timestamp)
    {
        return Err(ForecastError::InvalidData(format!(
            "timestamps out of order at index {}",
            i + 1
        )));
    }

    if history[0].timestamp == history[history.len() - 1].timestamp {
        return Err(ForecastError::InvalidData(
            "history must span at least two distinct timestamps".to_string(),
        ));
    }

    Ok(())
}

impl ForecastModel for AdditiveModel {
    fn fit(&mut self, history: &[Observation]) -> Result<()> {
        // A failed refit must not leave the previous fit in place
        self.state = None;
        validate_history(history)?;

        let start = history[0].timestamp;
        let span_ms = (history[history.len() - 1].timestamp - start).num_milliseconds() as f64;

        let max_abs = history.iter().map(|o| o.value.abs()).fold(0.0, f64::max);
        let y_scale = if max_abs > 0.0 { max_abs } else { 1.0 };

        let times: Vec<f64> = history
            .iter()
            .map(|o| (o.timestamp - start).num_milliseconds() as f64 / span_ms)
            .collect();
        let ys: Vec<f64> = history.iter().map(|o| o.value / y_scale).collect();
        let features: Vec<Vec<f64>> = history
            .iter()
            .map(|o| self.seasonal_features(&o.timestamp))
            .collect();

        let (trend, seasonal, factor) = self.solve_coefficients(&times, &ys, &features)?;

        let residuals: Vec<f64> = times
            .iter()
            .zip(&ys)
            .zip(&features)
            .map(|((&t, &y), f)| {
                let level = trend[0] + trend[1] * t;
                y - self.combine(level, dot(f, &seasonal))
            })
            .collect();
        let sigma = residual_std(&residuals, self.n_params());
        if !sigma.is_finite() {
            return Err(ForecastError::NumericalError(
                "residual spread is not finite".to_string(),
            ));
        }

        debug!(
            observations = history.len(),
            params = self.n_params(),
            sigma = sigma * y_scale,
            mode = ?self.config.seasonality_mode,
            "fitted additive model"
        );

        self.state = Some(FittedState {
            start,
            span_ms,
            y_scale,
            trend,
            seasonal,
            factor,
            band: IntervalBand::new(self.config.interval_width, sigma),
            n_observations: history.len(),
        });
        Ok(())
    }

    fn predict(&self, timestamps: &[NaiveDateTime]) -> Result<Vec<Prediction>> {
        let state = self.state.as_ref().ok_or(ForecastError::NotFitted)?;

        timestamps
            .iter()
            .map(|ts| {
                let t = state.scaled_time(ts);
                let features = self.seasonal_features(ts);
                let level = state.level(t);
                let yhat = self.combine(level, dot(&features, &state.seasonal));

                let row = design_row(t, &features, self.seasonal_weight(level));
                let leverage = state.factor.inverse_quadratic_form(&row);
                let (lower, upper) = state.band.bounds(yhat, leverage);

                let prediction = Prediction::new(
                    *ts,
                    yhat * state.y_scale,
                    lower * state.y_scale,
                    upper * state.y_scale,
                );
                if !(prediction.yhat_lower.is_finite() && prediction.yhat_upper.is_finite()) {
                    return Err(ForecastError::NumericalError(format!(
                        "non-finite prediction at {ts}"
                    )));
                }
                Ok(prediction)
            })
            .collect()
    }

    fn is_fitted(&self) -> bool {
        self.state.is_some()
    }
}
