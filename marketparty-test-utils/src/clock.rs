//! Deterministic clock for tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::constant::TEST_NOW_TIMESTAMP;

/// Clock that always reports the same instant.
#[derive(Clone, Copy, Debug)]
pub struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl FixtureClock {
    pub fn new(utc_now: DateTime<Utc>) -> Self {
        Self { utc_now }
    }
}

impl Default for FixtureClock {
    fn default() -> Self {
        match Utc.timestamp_opt(TEST_NOW_TIMESTAMP, 0).single() {
            Some(utc_now) => Self { utc_now },
            None => panic!("invalid fixture timestamp"),
        }
    }
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}
