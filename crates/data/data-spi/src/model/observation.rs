//! Observation data structure.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One hourly sample of energy consumption.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Local wall-clock time of the sample
    pub timestamp: NaiveDateTime,
    /// Consumption value
    pub value: f64,
}

impl Observation {
    pub fn new(timestamp: NaiveDateTime, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// Chronologically ordered observations.
pub type Series = Vec<Observation>;
