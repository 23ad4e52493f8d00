//! Policies that shape how time is attributed, windowed and measured.
//! All of them are plain config values (`snake_case` in YAML).

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a 7-day window is laid out around its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekPolicy {
    /// 7 consecutive days ending at the anchor.
    #[default]
    Rolling,
    /// Monday to Sunday of the week containing the anchor.
    Aligned,
}

/// Where the hours of a session that crosses midnight are booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanPolicy {
    /// The whole duration goes to the punch-out day.
    #[default]
    PunchOutDay,
    /// The duration is cut at each local midnight and booked per day.
    Split,
}

/// Hour arithmetic used when a day is edited by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoursArithmetic {
    /// `(out - in) / 3_600_000` on milliseconds.
    #[default]
    Exact,
    /// Whole minutes only: `floor(hours) + (minutes % 60) / 60`.
    TruncatedMinutes,
}

impl fmt::Display for WeekPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekPolicy::Rolling => write!(f, "rolling"),
            WeekPolicy::Aligned => write!(f, "aligned"),
        }
    }
}

impl fmt::Display for SpanPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanPolicy::PunchOutDay => write!(f, "punch_out_day"),
            SpanPolicy::Split => write!(f, "split"),
        }
    }
}

impl fmt::Display for HoursArithmetic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HoursArithmetic::Exact => write!(f, "exact"),
            HoursArithmetic::TruncatedMinutes => write!(f, "truncated_minutes"),
        }
    }
}
