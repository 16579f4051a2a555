use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifies an access code. The value itself is the bearer secret handed to
/// the user, so treat it like a password: never log it alongside `info` events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccessCodeId(pub Uuid);

impl AccessCodeId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for AccessCodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for AccessCodeId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<Uuid> for AccessCodeId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

/// One-time access code bound to an email address.
///
/// Only `used` changes after creation, and only from `false` to `true`.
#[derive(Debug, Clone)]
pub struct AccessCode {
    pub id: AccessCodeId,
    pub email: String,
    pub used: bool,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl AccessCode {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// A code can be redeemed iff it is unused and `now < expires_at`.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        !self.used && !self.is_expired_at(now)
    }
}
