//! Punch-in / punch-out state machine.
//!
//! `Idle --punch_in--> Active --punch_out--> Idle`. The start of an open
//! session is persisted under the marker key, so a tracker restored after a
//! restart picks the running clock up where it was. A failed transition leaves
//! both the in-memory state and the store as they were.

use crate::core::calculator::hours::exact_hours;
use crate::core::calculator::progress::progress_ratio;
use crate::core::records::DayStore;
use crate::db::kv::KeyValueStore;
use crate::errors::{AppError, AppResult};
use crate::models::date_key::DateKey;
use crate::models::day_record::{DayRecord, to_stored_instant};
use crate::models::policy::SpanPolicy;
use crate::models::session::{Session, SessionState};
use crate::models::store_key::StoreKey;
use chrono::{DateTime, Duration, SubsecRound, TimeZone};
use tracing::{debug, info, warn};

/// One slice of a session booked on a single day.
struct Segment<Tz: TimeZone> {
    key: DateKey,
    start: DateTime<Tz>,
    end: DateTime<Tz>,
}

pub struct SessionTracker<'a, S: KeyValueStore, Tz: TimeZone> {
    store: &'a DayStore<S>,
    tz: Tz,
    span_policy: SpanPolicy,
    state: SessionState<Tz>,
}

impl<'a, S: KeyValueStore, Tz: TimeZone> SessionTracker<'a, S, Tz> {
    /// Rebuild the tracker from the persisted marker. An unreadable marker
    /// is logged and treated as no open session.
    pub fn restore(store: &'a DayStore<S>, tz: Tz, span_policy: SpanPolicy) -> Self {
        let state = match load_marker(store.kv(), &tz) {
            Some(start_time) => {
                debug!(start = %start_time.to_rfc3339(), "restored open session");
                SessionState::Active(Session { start_time })
            }
            None => SessionState::Idle,
        };

        Self {
            store,
            tz,
            span_policy,
            state,
        }
    }

    pub fn state(&self) -> &SessionState<Tz> {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn punch_in(&mut self, at: DateTime<Tz>) -> AppResult<()> {
        if let SessionState::Active(s) = &self.state {
            return Err(AppError::InvalidState(format!(
                "already punched in at {}",
                s.start_time.to_rfc3339()
            )));
        }

        let at = at.trunc_subsecs(3);
        self.store.kv().set_item(
            &StoreKey::PunchInMarker.to_string(),
            &at.timestamp_millis().to_string(),
        )?;

        info!(at = %at.to_rfc3339(), "punched in");
        self.state = SessionState::Active(Session { start_time: at });
        Ok(())
    }

    /// Time since punch-in. Negative if `now` is earlier than the start.
    pub fn tick(&self, now: &DateTime<Tz>) -> AppResult<Duration> {
        match &self.state {
            SessionState::Active(s) => Ok(now.clone().signed_duration_since(s.start_time.clone())),
            SessionState::Idle => Err(AppError::InvalidState("not punched in".into())),
        }
    }

    /// Share of the daily target covered by the running session.
    pub fn progress(&self, now: &DateTime<Tz>, capacity_hours: f64) -> AppResult<f64> {
        progress_ratio(self.tick(now)?, capacity_hours)
    }

    /// Close the session and book its duration. Returns the punch-out day's
    /// record as written.
    pub fn punch_out(&mut self, at: DateTime<Tz>) -> AppResult<DayRecord> {
        let start = match &self.state {
            SessionState::Active(s) => s.start_time.clone(),
            SessionState::Idle => {
                return Err(AppError::InvalidState("not punched in".into()));
            }
        };

        let at = at.trunc_subsecs(3);
        let duration = at.clone().signed_duration_since(start.clone());
        if duration < Duration::zero() {
            return Err(AppError::InvalidDuration(format!(
                "punch-out {} is before punch-in {}",
                at.to_rfc3339(),
                start.to_rfc3339()
            )));
        }

        let segments = match self.span_policy {
            SpanPolicy::PunchOutDay => vec![Segment {
                key: DateKey::of(&at),
                start: start.clone(),
                end: at.clone(),
            }],
            SpanPolicy::Split => self.split_at_midnight(&start, &at)?,
        };

        let mut written: Vec<(DateKey, DayRecord)> = Vec::with_capacity(segments.len());
        let mut last = DayRecord::default();

        for seg in segments {
            let previous = self.store.get(&seg.key);
            let hours = exact_hours(seg.end.clone().signed_duration_since(seg.start.clone()));
            let record = DayRecord {
                punch_in_time: Some(to_stored_instant(seg.start)),
                punch_out_time: Some(to_stored_instant(seg.end)),
                total_hours: previous.total_hours + hours,
            };

            if let Err(e) = self.store.put(&seg.key, &record) {
                self.roll_back(&written);
                return Err(e);
            }
            written.push((seg.key, previous));
            last = record;
        }

        if let Err(e) = self
            .store
            .kv()
            .remove_item(&StoreKey::PunchInMarker.to_string())
        {
            self.roll_back(&written);
            return Err(e);
        }

        info!(
            at = %at.to_rfc3339(),
            hours = exact_hours(duration),
            days = written.len(),
            "punched out"
        );
        self.state = SessionState::Idle;
        Ok(last)
    }

    /// Cut `[start, end]` at every local midnight in between.
    fn split_at_midnight(
        &self,
        start: &DateTime<Tz>,
        end: &DateTime<Tz>,
    ) -> AppResult<Vec<Segment<Tz>>> {
        let end_key = DateKey::of(end);
        let mut segments = Vec::new();
        let mut cursor = start.clone();

        while DateKey::of(&cursor) < end_key {
            let next_day = DateKey::of(&cursor).add_days(1)?.date();
            let midnight = next_day
                .and_hms_opt(0, 0, 0)
                .and_then(|naive| self.tz.from_local_datetime(&naive).earliest())
                .ok_or_else(|| {
                    AppError::InvalidDuration(format!("cannot resolve local midnight of {next_day}"))
                })?;

            segments.push(Segment {
                key: DateKey::of(&cursor),
                start: cursor.clone(),
                end: midnight.clone(),
            });
            cursor = midnight;
        }

        segments.push(Segment {
            key: end_key,
            start: cursor,
            end: end.clone(),
        });
        Ok(segments)
    }

    /// Restore records overwritten by a punch-out that did not complete.
    fn roll_back(&self, written: &[(DateKey, DayRecord)]) {
        for (key, previous) in written.iter().rev() {
            if let Err(e) = self.store.put(key, previous) {
                warn!(key = %key, error = %e, "could not restore day record after failed punch-out");
            }
        }
    }
}

fn load_marker<S: KeyValueStore, Tz: TimeZone>(kv: &S, tz: &Tz) -> Option<DateTime<Tz>> {
    let key = StoreKey::PunchInMarker.to_string();

    let raw = match kv.get_item(&key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!(reason = "unavailable", error = %e, "punch-in marker read failed");
            return None;
        }
    };

    let restored = raw
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|ms| tz.timestamp_millis_opt(ms).single());

    if restored.is_none() {
        warn!(reason = "corrupt", raw = %raw, "punch-in marker unreadable");
    }
    restored
}
