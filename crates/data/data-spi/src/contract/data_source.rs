//! Data source trait definition.

use chrono::NaiveDateTime;

use crate::error::Result;
use crate::model::Series;

/// Trait for providers of hourly energy consumption series.
///
/// A source returns the trailing window that ends at `now`, in chronological
/// order and without duplicate timestamps.
pub trait DataSource: Send {
    /// Data source name.
    fn name(&self) -> &str;

    /// Fetch the trailing window ending at `now`.
    fn fetch(&mut self, now: NaiveDateTime) -> Result<Series>;
}
