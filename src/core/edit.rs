use crate::core::calculator::hours::hours_for;
use crate::core::records::DayStore;
use crate::db::kv::KeyValueStore;
use crate::errors::{AppError, AppResult};
use crate::models::date_key::DateKey;
use crate::models::day_record::{DayRecord, to_stored_instant};
use crate::models::policy::HoursArithmetic;
use chrono::{DateTime, TimeZone, Utc};
use tracing::info;

/// Manual correction of a recorded day.
pub struct EditLogic;

impl EditLogic {
    /// Replace the punch times of `key`. A `None` keeps the stored value.
    ///
    /// The total is recomputed from the resulting pair alone and replaces
    /// whatever was accumulated before; with only one side known the total
    /// is zero. The caller refreshes any summaries afterwards.
    pub fn edit_day<S: KeyValueStore, Tz: TimeZone>(
        store: &DayStore<S>,
        key: &DateKey,
        new_in: Option<DateTime<Tz>>,
        new_out: Option<DateTime<Tz>>,
        arithmetic: HoursArithmetic,
    ) -> AppResult<DayRecord> {
        if new_in.is_none() && new_out.is_none() {
            return Err(AppError::Validation(
                "provide a punch-in time, a punch-out time, or both".into(),
            ));
        }

        if let (Some(i), Some(o)) = (&new_in, &new_out)
            && o < i
        {
            return Err(AppError::Validation(format!(
                "punch-out {} is before punch-in {}",
                o.to_rfc3339(),
                i.to_rfc3339()
            )));
        }

        let current = store.get(key);
        let punch_in: Option<DateTime<Utc>> = new_in.map(to_stored_instant).or(current.punch_in_time);
        let punch_out: Option<DateTime<Utc>> =
            new_out.map(to_stored_instant).or(current.punch_out_time);

        let total_hours = match (punch_in, punch_out) {
            (Some(i), Some(o)) if o < i => {
                return Err(AppError::Validation(format!(
                    "punch-out {} would precede the stored punch-in {}",
                    o.to_rfc3339(),
                    i.to_rfc3339()
                )));
            }
            (Some(i), Some(o)) => hours_for(o - i, arithmetic),
            _ => 0.0,
        };

        let record = DayRecord {
            punch_in_time: punch_in,
            punch_out_time: punch_out,
            total_hours,
        };

        store.put(key, &record)?;
        info!(key = %key, total_hours, "day edited");
        Ok(record)
    }
}
