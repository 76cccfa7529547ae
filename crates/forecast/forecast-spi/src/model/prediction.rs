//! Prediction model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Point forecast with its uncertainty interval
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub timestamp: NaiveDateTime,
    /// Point forecast
    pub yhat: f64,
    /// Lower bound of the uncertainty interval
    pub yhat_lower: f64,
    /// Upper bound of the uncertainty interval
    pub yhat_upper: f64,
}

impl Prediction {
    pub fn new(timestamp: NaiveDateTime, yhat: f64, yhat_lower: f64, yhat_upper: f64) -> Self {
        Self {
            timestamp,
            yhat,
            yhat_lower,
            yhat_upper,
        }
    }

    /// `yhat_lower <= yhat <= yhat_upper`
    pub fn is_ordered(&self) -> bool {
        self.yhat_lower <= self.yhat && self.yhat <= self.yhat_upper
    }

    pub fn width(&self) -> f64 {
        self.yhat_upper - self.yhat_lower
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_bounds_relationship() {
        let p = Prediction::new(ts(), 100.0, 90.0, 112.0);
        assert!(p.is_ordered());
        assert_eq!(p.width(), 22.0);

        let inverted = Prediction::new(ts(), 100.0, 101.0, 112.0);
        assert!(!inverted.is_ordered());
    }

    #[test]
    fn test_degenerate_interval_is_ordered() {
        let p = Prediction::new(ts(), 5.0, 5.0, 5.0);
        assert!(p.is_ordered());
        assert_eq!(p.width(), 0.0);
    }
}
