use crate::models::policy::HoursArithmetic;
use chrono::Duration;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Hours as `millis / 3_600_000`.
pub fn exact_hours(d: Duration) -> f64 {
    d.num_milliseconds() as f64 / MILLIS_PER_HOUR
}

/// Whole hours plus the minute remainder as a fraction; seconds are dropped.
pub fn truncated_minute_hours(d: Duration) -> f64 {
    let mins = d.num_minutes();
    (mins / 60) as f64 + (mins % 60) as f64 / 60.0
}

pub fn hours_for(d: Duration, arithmetic: HoursArithmetic) -> f64 {
    match arithmetic {
        HoursArithmetic::Exact => exact_hours(d),
        HoursArithmetic::TruncatedMinutes => truncated_minute_hours(d),
    }
}
