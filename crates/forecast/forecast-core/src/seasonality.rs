//! Fourier seasonality terms
//!
//! A seasonal cycle of period `P` days is represented by `order` pairs of
//! `sin(2πnt/P)`, `cos(2πnt/P)` regressors, with `t` measured in days since
//! the Unix epoch so that the phase does not depend on the training window.

use std::f64::consts::PI;

use chrono::NaiveDateTime;
use forecast_spi::ModelConfig;

/// One periodic component of the model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FourierSeasonality {
    pub name: &'static str,
    /// Cycle length in days
    pub period_days: f64,
    /// Number of sin/cos pairs
    pub order: usize,
}

pub const DAILY: FourierSeasonality = FourierSeasonality {
    name: "daily",
    period_days: 1.0,
    order: 4,
};

pub const WEEKLY: FourierSeasonality = FourierSeasonality {
    name: "weekly",
    period_days: 7.0,
    order: 3,
};

pub const YEARLY: FourierSeasonality = FourierSeasonality {
    name: "yearly",
    period_days: 365.25,
    order: 10,
};

impl FourierSeasonality {
    /// Number of regressors this component contributes
    pub fn width(&self) -> usize {
        2 * self.order
    }

    /// Append the regressors for time `days` to `out`
    pub fn extend_features(&self, days: f64, out: &mut Vec<f64>) {
        for n in 1..=self.order {
            let angle = 2.0 * PI * n as f64 * days / self.period_days;
            out.push(angle.sin());
            out.push(angle.cos());
        }
    }
}

/// Components switched on by `config`, in a fixed order.
pub fn enabled_seasonalities(config: &ModelConfig) -> Vec<FourierSeasonality> {
    [
        (config.daily_seasonality, DAILY),
        (config.weekly_seasonality, WEEKLY),
        (config.yearly_seasonality, YEARLY),
    ]
    .into_iter()
    .filter_map(|(on, s)| on.then_some(s))
    .collect()
}

/// Fractional days since 1970-01-01T00:00:00.
pub fn days_since_epoch(ts: &NaiveDateTime) -> f64 {
    ts.and_utc().timestamp_millis() as f64 / 86_400_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeDelta};

    #[test]
    fn test_enabled_for_default_config() {
        let components = enabled_seasonalities(&ModelConfig::default());
        assert_eq!(components, vec![DAILY, WEEKLY]);
        let width: usize = components.iter().map(|s| s.width()).sum();
        assert_eq!(width, 14);
    }

    #[test]
    fn test_nothing_enabled() {
        let config = ModelConfig {
            daily_seasonality: false,
            weekly_seasonality: false,
            ..ModelConfig::default()
        };
        assert!(enabled_seasonalities(&config).is_empty());
    }

    #[test]
    fn test_features_repeat_each_period() {
        let ts = NaiveDate::from_ymd_opt(2024, 2, 10)
            .unwrap()
            .and_hms_opt(7, 0, 0)
            .unwrap();
        let next_day = ts + TimeDelta::days(1);

        let mut a = Vec::new();
        let mut b = Vec::new();
        DAILY.extend_features(days_since_epoch(&ts), &mut a);
        DAILY.extend_features(days_since_epoch(&next_day), &mut b);

        assert_eq!(a.len(), DAILY.width());
        for (x, y) in a.iter().zip(b.iter()) {
            assert!((x - y).abs() < 1e-9);
        }
    }

    #[test]
    fn test_days_since_epoch() {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 2)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert!((days_since_epoch(&epoch) - 1.5).abs() < 1e-12);
    }
}
