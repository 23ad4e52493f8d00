use super::date_key::DateKey;
use std::fmt;

/// Wire key of the in-progress session marker.
pub const PUNCH_IN_MARKER: &str = "punchInTime";

/// Every key the engine writes to the key-value collaborator.
///
/// Day keys always render as `YYYY-MM-DD`, so they can never collide with
/// the marker key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Day(DateKey),
    PunchInMarker,
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreKey::Day(key) => write!(f, "{key}"),
            StoreKey::PunchInMarker => f.write_str(PUNCH_IN_MARKER),
        }
    }
}

impl From<DateKey> for StoreKey {
    fn from(key: DateKey) -> Self {
        StoreKey::Day(key)
    }
}
