use crate::errors::{AppError, AppResult};
use chrono::Duration;

/// `elapsed / capacity`, clamped to `0.0..=1.0`.
pub fn progress_ratio(elapsed: Duration, capacity_hours: f64) -> AppResult<f64> {
    if !capacity_hours.is_finite() || capacity_hours <= 0.0 {
        return Err(AppError::Validation(format!(
            "daily target must be a positive number of hours, got {capacity_hours}"
        )));
    }

    let ratio = super::hours::exact_hours(elapsed) / capacity_hours;
    Ok(ratio.clamp(0.0, 1.0))
}
