//! Model configuration record

use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, Result};

/// How seasonal components combine with the trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonalityMode {
    /// `y = trend + seasonal`
    #[default]
    Additive,
    /// `y = trend · (1 + seasonal)`
    Multiplicative,
}

/// Configuration for a seasonal forecasting model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub yearly_seasonality: bool,
    pub weekly_seasonality: bool,
    pub daily_seasonality: bool,
    pub seasonality_mode: SeasonalityMode,
    /// Coverage of the uncertainty interval (e.g., 0.80 for 80%)
    pub interval_width: f64,
    /// Prior scale of the seasonal coefficients; smaller values dampen seasonality
    pub seasonality_prior_scale: f64,
}

impl Default for ModelConfig {
    /// Hourly energy profile: daily and weekly cycles, no yearly cycle.
    fn default() -> Self {
        Self {
            yearly_seasonality: false,
            weekly_seasonality: true,
            daily_seasonality: true,
            seasonality_mode: SeasonalityMode::Additive,
            interval_width: 0.80,
            seasonality_prior_scale: 10.0,
        }
    }
}

impl ModelConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.interval_width > 0.0 && self.interval_width < 1.0) {
            return Err(ForecastError::invalid_parameter(
                "interval_width",
                format!("must lie in (0, 1), got {}", self.interval_width),
            ));
        }
        if !(self.seasonality_prior_scale.is_finite() && self.seasonality_prior_scale > 0.0) {
            return Err(ForecastError::invalid_parameter(
                "seasonality_prior_scale",
                format!("must be positive, got {}", self.seasonality_prior_scale),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_hourly_profile() {
        let config = ModelConfig::default();
        assert!(!config.yearly_seasonality);
        assert!(config.weekly_seasonality);
        assert!(config.daily_seasonality);
        assert_eq!(config.seasonality_mode, SeasonalityMode::Additive);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_interval_width() {
        for width in [0.0, 1.0, -0.5, f64::NAN] {
            let config = ModelConfig {
                interval_width: width,
                ..ModelConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ForecastError::InvalidParameter { .. })
            ));
        }
    }

    #[test]
    fn test_rejects_bad_prior_scale() {
        let config = ModelConfig {
            seasonality_prior_scale: 0.0,
            ..ModelConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_mode_serializes_lowercase() {
        let json = serde_json::to_string(&SeasonalityMode::Multiplicative).unwrap();
        assert_eq!(json, "\"multiplicative\"");

        let config: ModelConfig = serde_json::from_str(
            r#"{"yearly_seasonality":false,"weekly_seasonality":true,"daily_seasonality":true,
                "seasonality_mode":"additive","interval_width":0.95,"seasonality_prior_scale":5.0}"#,
        )
        .unwrap();
        assert_eq!(config.interval_width, 0.95);
    }
}
