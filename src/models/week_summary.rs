use super::date_key::DateKey;
use super::day_record::DayRecord;
use std::collections::BTreeMap;
use std::fmt;

/// One record per day of a window, iterated oldest first.
pub type WeeklySummary = BTreeMap<DateKey, DayRecord>;

/// Total of one week. A zero total is reported as `NotAvailable`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeekHours {
    Hours(f64),
    NotAvailable,
}

impl WeekHours {
    pub fn from_total(total: f64) -> Self {
        if total == 0.0 {
            WeekHours::NotAvailable
        } else {
            WeekHours::Hours(total)
        }
    }

    pub fn hours(&self) -> Option<f64> {
        match self {
            WeekHours::Hours(h) => Some(*h),
            WeekHours::NotAvailable => None,
        }
    }
}

impl fmt::Display for WeekHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekHours::Hours(h) => write!(f, "{h:.2} Hrs"),
            WeekHours::NotAvailable => f.write_str("N/A"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekTotal {
    /// Monday to Friday, e.g. `8th Jan - 12th Jan`.
    pub label: String,
    /// Monday of the week.
    pub start: DateKey,
    pub hours: WeekHours,
}

/// Both read-side projections, rebuilt from the store on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct Summaries {
    pub weekly: WeeklySummary,
    pub eight_week: Vec<WeekTotal>,
}
