//! Read-side projections over the day store: one 7-day window, and the
//! totals of the last 8 calendar weeks.
//!
//! Nothing is cached. Every call reads the store again, so the result
//! reflects all writes completed before the call started. Records written
//! while a projection is being built may or may not be seen.

use crate::core::records::DayStore;
use crate::db::kv::KeyValueStore;
use crate::errors::AppResult;
use crate::models::date_key::{DateKey, WeekWindow};
use crate::models::policy::WeekPolicy;
use crate::models::week_summary::{Summaries, WeekHours, WeekTotal, WeeklySummary};
use crate::utils::date::week_label;

/// Weeks covered by [`Aggregator::eight_week_summary`].
pub const SUMMARY_WEEKS: i64 = 8;

pub struct Aggregator<'a, S: KeyValueStore> {
    store: &'a DayStore<S>,
}

impl<'a, S: KeyValueStore> Aggregator<'a, S> {
    pub fn new(store: &'a DayStore<S>) -> Self {
        Self { store }
    }

    /// The 7 records of one window, oldest first. Days without data carry
    /// the zero record.
    pub fn weekly_summary(
        &self,
        anchor: DateKey,
        offset_weeks: i64,
        policy: WeekPolicy,
    ) -> AppResult<WeeklySummary> {
        Ok(WeekWindow::new(anchor, offset_weeks, policy)?
            .into_iter()
            .map(|key| (key, self.store.get(&key)))
            .collect())
    }

    /// Monday-to-Sunday totals of the 8 weeks up to the one containing
    /// `anchor`, most recent first. Labels name Monday to Friday.
    pub fn eight_week_summary(&self, anchor: DateKey) -> AppResult<Vec<WeekTotal>> {
        (0..SUMMARY_WEEKS)
            .map(|offset| -> AppResult<WeekTotal> {
                let window = WeekWindow::new(anchor, offset, WeekPolicy::Aligned)?;
                let total: f64 = window
                    .iter()
                    .map(|key| self.store.get(key).total_hours)
                    .sum();

                Ok(WeekTotal {
                    label: week_label(window.start())?,
                    start: window.start(),
                    hours: WeekHours::from_total(total),
                })
            })
            .collect()
    }

    /// Rebuild both projections. Call after every mutation.
    pub fn refresh(&self, anchor: DateKey, weekly_policy: WeekPolicy) -> AppResult<Summaries> {
        Ok(Summaries {
            weekly: self.weekly_summary(anchor, 0, weekly_policy)?,
            eight_week: self.eight_week_summary(anchor)?,
        })
    }
}
