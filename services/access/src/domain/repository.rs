#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};

use crate::domain::types::{AccessCode, AccessCodeId};
use crate::error::AccessError;

/// Repository for one-time access codes.
///
/// Implementations must make `consume` atomic at the store: several processes
/// may redeem the same code at once and only one of them may win.
pub trait AccessCodeRepository: Send + Sync {
    /// Create the backing table and its `(used, expires_at)` index if absent.
    async fn ensure_schema(&self) -> Result<(), AccessError>;

    /// Insert a new code. Fails if the id already exists.
    async fn insert(&self, code: &AccessCode) -> Result<(), AccessError>;

    async fn find_by_id(&self, id: AccessCodeId) -> Result<Option<AccessCode>, AccessError>;

    /// Flip `used` to true iff the code is still unused and `expires_at > now`.
    /// Returns `true` when this call performed the transition.
    async fn consume(&self, id: AccessCodeId, now: DateTime<Utc>) -> Result<bool, AccessError>;

    /// Unused codes with `expires_at < now`, oldest expiry first.
    async fn list_expired_unused(
        &self,
        now: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<AccessCode>, AccessError>;
}
