use chrono::{DateTime, TimeZone};

/// An open punch-in. Lives in memory; only `start_time` is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Session<Tz: TimeZone> {
    pub start_time: DateTime<Tz>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState<Tz: TimeZone> {
    Idle,
    Active(Session<Tz>),
}

impl<Tz: TimeZone> SessionState<Tz> {
    pub fn is_active(&self) -> bool {
        matches!(self, SessionState::Active(_))
    }

    pub fn start_time(&self) -> Option<&DateTime<Tz>> {
        match self {
            SessionState::Active(s) => Some(&s.start_time),
            SessionState::Idle => None,
        }
    }
}
