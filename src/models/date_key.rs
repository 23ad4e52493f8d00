//! Calendar-day identifiers and 7-day windows.

use super::policy::WeekPolicy;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone};
use std::fmt;
use std::str::FromStr;

const KEY_FORMAT: &str = "%Y-%m-%d";

/// A local calendar day, rendered as `YYYY-MM-DD`.
///
/// Ordering follows the calendar, so a `BTreeMap<DateKey, _>` iterates
/// chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Truncate a timestamp to the calendar day of its own time zone.
    pub fn of<Tz: TimeZone>(ts: &DateTime<Tz>) -> Self {
        DateKey(ts.date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Weekday with Sunday = 0 … Saturday = 6.
    pub fn weekday_from_sunday(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// Fails with [`AppError::DateOutOfRange`] past the calendar limits.
    pub fn add_days(&self, days: i64) -> AppResult<Self> {
        Duration::try_days(days)
            .and_then(|d| self.0.checked_add_signed(d))
            .map(DateKey)
            .ok_or_else(|| AppError::DateOutOfRange(format!("{self} {days:+} days")))
    }

    /// Monday of the week containing this day. Sunday maps 6 days back.
    pub fn monday(&self) -> AppResult<Self> {
        let back = (self.weekday_from_sunday() + 6) % 7;
        self.add_days(-(back as i64))
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(KEY_FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), KEY_FORMAT)
            .map(DateKey)
            .map_err(|_| AppError::InvalidDate(s.to_string()))
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        DateKey(date)
    }
}

/// Exactly 7 consecutive days, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekWindow {
    pub policy: WeekPolicy,
    days: [DateKey; 7],
}

impl WeekWindow {
    /// Window `offset_weeks` weeks before the one that contains `anchor`.
    /// Negative offsets move forward in time.
    pub fn new(anchor: DateKey, offset_weeks: i64, policy: WeekPolicy) -> AppResult<Self> {
        let back = offset_weeks.checked_mul(7).ok_or_else(|| {
            AppError::DateOutOfRange(format!("{anchor} minus {offset_weeks} weeks"))
        })?;

        let first = match policy {
            WeekPolicy::Rolling => anchor.add_days(-6)?.add_days(-back)?,
            WeekPolicy::Aligned => anchor.monday()?.add_days(-back)?,
        };

        let mut days = [first; 7];
        for (i, d) in days.iter_mut().enumerate() {
            *d = first.add_days(i as i64)?;
        }

        Ok(Self { policy, days })
    }

    /// Same as [`WeekWindow::new`], anchored on a timestamp's local day.
    pub fn around<Tz: TimeZone>(
        anchor: &DateTime<Tz>,
        offset_weeks: i64,
        policy: WeekPolicy,
    ) -> AppResult<Self> {
        Self::new(DateKey::of(anchor), offset_weeks, policy)
    }

    pub fn days(&self) -> &[DateKey; 7] {
        &self.days
    }

    pub fn start(&self) -> DateKey {
        self.days[0]
    }

    pub fn end(&self) -> DateKey {
        self.days[6]
    }

    pub fn iter(&self) -> impl Iterator<Item = &DateKey> {
        self.days.iter()
    }
}

impl IntoIterator for WeekWindow {
    type Item = DateKey;
    type IntoIter = std::array::IntoIter<DateKey, 7>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.into_iter()
    }
}
