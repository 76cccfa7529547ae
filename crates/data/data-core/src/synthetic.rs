//! Synthetic energy consumption series
//!
//! Produces one observation per hour over a trailing window. Each value is
//! a fixed daily curve plus a weekday/weekend offset, a slow linear drift and
//! Gaussian noise, floored at zero.

use std::f64::consts::PI;

use chrono::{Datelike, NaiveDateTime, TimeDelta, Timelike, Weekday};
use data_spi::{DataError, DataSource, Observation, Result, Series};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration for the synthetic generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Length of the trailing window in days
    pub window_days: u32,
    /// Standard deviation of the Gaussian noise term
    pub noise_std_dev: f64,
    /// Linear drift added per hourly step
    pub trend_per_step: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            window_days: 30,
            noise_std_dev: 5.0,
            trend_per_step: 0.01,
        }
    }
}

/// Longest window the generator accepts (ten years of hourly points)
pub const MAX_WINDOW_DAYS: u32 = 3_660;

impl GeneratorConfig {
    /// Number of observations the window produces (both ends inclusive).
    pub fn expected_len(&self) -> usize {
        self.window_days as usize * 24 + 1
    }
}

/// Daily load curve: `50 + 30·sin((h − 6)·π/12)`.
///
/// Peaks at midday (80) and bottoms out at midnight (20).
pub fn daily_component(hour: u32) -> f64 {
    50.0 + 30.0 * ((hour as f64 - 6.0) * PI / 12.0).sin()
}

/// Weekday offset: +10 Monday to Friday, −5 at the weekend.
pub fn weekly_component(weekday: Weekday) -> f64 {
    if weekday.num_days_from_monday() < 5 {
        10.0
    } else {
        -5.0
    }
}

/// Generator for synthetic hourly consumption.
///
/// Holds no randomness of its own; callers pass the RNG so that a seeded
/// handle reproduces the same series.
#[derive(Debug, Clone)]
pub struct SyntheticEnergyGenerator {
    config: GeneratorConfig,
    noise: Normal<f64>,
}

impl SyntheticEnergyGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        if config.window_days == 0 || config.window_days > MAX_WINDOW_DAYS {
            return Err(DataError::ConfigError(format!(
                "window_days must be between 1 and {MAX_WINDOW_DAYS}, got {}",
                config.window_days
            )));
        }
        if !config.noise_std_dev.is_finite() || config.noise_std_dev < 0.0 {
            return Err(DataError::ConfigError(format!(
                "noise_std_dev must be finite and non-negative, got {}",
                config.noise_std_dev
            )));
        }
        if !config.trend_per_step.is_finite() {
            return Err(DataError::ConfigError(
                "trend_per_step must be finite".to_string(),
            ));
        }

        let noise = Normal::new(0.0, config.noise_std_dev)
            .map_err(|e| DataError::ConfigError(e.to_string()))?;

        Ok(Self { config, noise })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Noise-free value for the `index`-th step at `ts`.
    pub fn baseline(&self, ts: NaiveDateTime, index: usize) -> f64 {
        daily_component(ts.hour())
            + weekly_component(ts.weekday())
            + self.config.trend_per_step * index as f64
    }

    /// Generate the hourly series from `now − window_days` to `now`.
    ///
    /// Fails when the window start falls outside the representable date range.
    pub fn generate<R: Rng + ?Sized>(&self, now: NaiveDateTime, rng: &mut R) -> Result<Series> {
        let steps = self.config.window_days as i64 * 24;
        let start = TimeDelta::try_hours(steps)
            .and_then(|window| now.checked_sub_signed(window))
            .ok_or_else(|| {
                DataError::ConfigError(format!(
                    "a {}-day window ending at {now} is out of range",
                    self.config.window_days
                ))
            })?;

        let series: Series = (0..=steps)
            .map(|i| {
                let ts = start + TimeDelta::hours(i);
                let noise = self.noise.sample(rng);
                let value = (self.baseline(ts, i as usize) + noise).max(0.0);
                Observation::new(ts, value)
            })
            .collect();

        debug!(points = series.len(), start = %start, end = %now, "generated synthetic series");
        Ok(series)
    }
}

/// Synthetic generator bundled with its own RNG, usable as a [`DataSource`].
#[derive(Debug, Clone)]
pub struct SyntheticSource {
    generator: SyntheticEnergyGenerator,
    rng: StdRng,
}

impl SyntheticSource {
    /// Reproducible source driven by `seed`.
    pub fn seeded(config: GeneratorConfig, seed: u64) -> Result<Self> {
        Ok(Self {
            generator: SyntheticEnergyGenerator::new(config)?,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Source seeded from OS entropy.
    pub fn from_entropy(config: GeneratorConfig) -> Result<Self> {
        Ok(Self {
            generator: SyntheticEnergyGenerator::new(config)?,
            rng: StdRng::from_entropy(),
        })
    }

    pub fn generator(&self) -> &SyntheticEnergyGenerator {
        &self.generator
    }
}

impl DataSource for SyntheticSource {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn fetch(&mut self, now: NaiveDateTime) -> Result<Series> {
        self.generator.generate(now, &mut self.rng)
    }
}
