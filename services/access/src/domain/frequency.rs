//! Day-granularity reference points for access-code expiry.
//!
//! All boundaries are UTC midnights. A code issued at any instant of a UTC day
//! stays valid for the rest of that day and expires at the next 00:00:00 UTC.

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};

/// Source of "now" for expiry arithmetic.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 00:00:00 UTC of the day containing `at`.
pub fn start_of_day(at: DateTime<Utc>) -> DateTime<Utc> {
    Utc.from_utc_datetime(&at.date_naive().and_time(NaiveTime::MIN))
}

/// 00:00:00 UTC of the day after the one containing `at`.
pub fn start_of_next_day(at: DateTime<Utc>) -> DateTime<Utc> {
    start_of_day(at) + Duration::days(1)
}

/// Start of the current UTC day.
pub fn today() -> DateTime<Utc> {
    start_of_day(Utc::now())
}

/// Start of the next UTC day; the expiry assigned to freshly issued codes.
pub fn tomorrow() -> DateTime<Utc> {
    start_of_next_day(Utc::now())
}
