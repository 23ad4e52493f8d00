//! Time utilities: parsing HH:MM and rendering clock times and durations.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// `HH:MM:SS`; hours grow past 24, negative durations show as zero.
pub fn format_elapsed(d: Duration) -> String {
    let total_seconds = d.num_seconds().max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// `HH:MM` in `tz`, or `--:--` when absent.
pub fn format_clock<Tz: TimeZone>(ts: Option<DateTime<Utc>>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match ts {
        Some(t) => t.with_timezone(tz).format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}
