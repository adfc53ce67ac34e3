//! Shared helpers for task module tests.

use chrono::{DateTime, Local, Utc};
use mockable::Clock;

/// Parses an RFC 3339 timestamp.
pub fn at(timestamp: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(timestamp)
        .expect("valid RFC 3339 timestamp")
        .with_timezone(&Utc)
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn at(timestamp: &str) -> Self {
        Self(at(timestamp))
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}
