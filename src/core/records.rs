//! Day record store: one [`DayRecord`] per [`DateKey`] on top of a
//! [`KeyValueStore`].
//!
//! Reads never fail. A missing key (or a stored `null`), an unreadable value
//! and an unavailable collaborator all yield the zero record. Absence logs at
//! debug; the other two warn with `reason = "corrupt"` or `"unavailable"`.
//! Writes always report failure to the caller.

use crate::db::kv::KeyValueStore;
use crate::errors::AppResult;
use crate::models::date_key::DateKey;
use crate::models::day_record::DayRecord;
use crate::models::store_key::StoreKey;
use tracing::{debug, warn};

pub struct DayStore<S: KeyValueStore> {
    kv: S,
}

impl<S: KeyValueStore> DayStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    pub fn kv(&self) -> &S {
        &self.kv
    }

    pub fn get(&self, key: &DateKey) -> DayRecord {
        let store_key = StoreKey::Day(*key).to_string();

        let raw = match self.kv.get_item(&store_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %store_key, "no record stored, using zero record");
                return DayRecord::default();
            }
            Err(e) => {
                warn!(key = %store_key, reason = "unavailable", error = %e, "day record read failed, using zero record");
                return DayRecord::default();
            }
        };

        match DayRecord::decode(&raw) {
            Ok(None) => {
                debug!(key = %store_key, "null stored, using zero record");
                DayRecord::default()
            }
            Ok(Some(record)) => {
                if DayRecord::is_legacy_value(&raw) {
                    debug!(key = %store_key, "read legacy millisecond value");
                }
                record
            }
            Err(e) => {
                warn!(key = %store_key, reason = "corrupt", error = %e, raw = %raw, "day record unreadable, using zero record");
                DayRecord::default()
            }
        }
    }

    /// Overwrite the whole record for `key`.
    pub fn put(&self, key: &DateKey, record: &DayRecord) -> AppResult<()> {
        let value = record.encode()?;
        let store_key = StoreKey::Day(*key).to_string();
        self.kv.set_item(&store_key, &value)?;
        debug!(key = %store_key, total_hours = record.total_hours, "day record written");
        Ok(())
    }
}
