//! Persisted work time for one calendar day.

use crate::errors::{AppError, AppResult};
use chrono::serde::ts_milliseconds_option;
use chrono::{DateTime, SubsecRound, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Wire shape: `{"punchInTime": ms|null, "punchOutTime": ms|null, "totalHours": number}`.
///
/// `total_hours` is derived: either the span of the last punch pair or the
/// sum of every session booked on the day.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    #[serde(with = "ts_milliseconds_option", default)]
    pub punch_in_time: Option<DateTime<Utc>>,
    #[serde(with = "ts_milliseconds_option", default)]
    pub punch_out_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub total_hours: f64,
}

impl DayRecord {
    /// Timestamps are kept at millisecond precision, same as the wire format.
    pub fn new<Tz: TimeZone>(
        punch_in: Option<DateTime<Tz>>,
        punch_out: Option<DateTime<Tz>>,
        total_hours: f64,
    ) -> Self {
        Self {
            punch_in_time: punch_in.map(to_stored_instant),
            punch_out_time: punch_out.map(to_stored_instant),
            total_hours,
        }
    }

    /// Nothing recorded for the day.
    pub fn is_empty(&self) -> bool {
        self.punch_in_time.is_none() && self.punch_out_time.is_none() && self.total_hours == 0.0
    }

    pub fn validate(&self) -> AppResult<()> {
        if !self.total_hours.is_finite() || self.total_hours < 0.0 {
            return Err(AppError::Validation(format!(
                "totalHours must be a non-negative number, got {}",
                self.total_hours
            )));
        }
        Ok(())
    }

    pub fn encode(&self) -> AppResult<String> {
        self.validate()?;
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a stored value. Besides the JSON record, a bare number is
    /// accepted: early versions stored accumulated milliseconds directly.
    /// A JSON `null` holds no record and decodes to `None`.
    pub fn decode(raw: &str) -> AppResult<Option<Self>> {
        let record = match serde_json::from_str::<Value>(raw)? {
            Value::Null => return Ok(None),
            Value::Number(n) => {
                let millis = n
                    .as_f64()
                    .ok_or_else(|| AppError::Validation(format!("unreadable number {n}")))?;
                DayRecord {
                    total_hours: millis / MILLIS_PER_HOUR,
                    ..Default::default()
                }
            }
            v @ Value::Object(_) => serde_json::from_value(v)?,
            other => {
                return Err(AppError::Validation(format!(
                    "expected a day record, found {other}"
                )));
            }
        };

        record.validate()?;
        Ok(Some(record))
    }

    /// True for the bare-milliseconds layout handled by [`DayRecord::decode`].
    pub fn is_legacy_value(raw: &str) -> bool {
        matches!(serde_json::from_str::<Value>(raw), Ok(Value::Number(_)))
    }
}

pub fn to_stored_instant<Tz: TimeZone>(ts: DateTime<Tz>) -> DateTime<Utc> {
    ts.with_timezone(&Utc).trunc_subsecs(3)
}
