//! Timestamp helpers.

use chrono::{Local, NaiveDateTime, Timelike};

/// Current local wall-clock time without zone information.
pub fn now_local() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Render a timestamp as ISO-8601 with microsecond precision.
///
/// The fractional part is omitted when it is zero, so whole hours render as
/// `2024-01-15T09:00:00`.
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    if ts.nanosecond() / 1_000 == 0 {
        ts.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        ts.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}
