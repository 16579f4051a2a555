use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::domain::frequency::Clock;
use crate::domain::repository::AccessCodeRepository;
use crate::domain::types::{AccessCode, AccessCodeId};
use crate::error::AccessError;

pub struct RedeemCodeUseCase<A, C>
where
    A: AccessCodeRepository,
    C: Clock,
{
    pub access_codes: A,
    pub clock: C,
}

impl<A, C> RedeemCodeUseCase<A, C>
where
    A: AccessCodeRepository,
    C: Clock,
{
    /// Consume `code_id` and return the email it was issued for.
    pub async fn execute(&self, code_id: &str) -> Result<String, AccessError> {
        // A string that is not an id was never issued.
        let Ok(id) = code_id.parse::<AccessCodeId>() else {
            debug!("redemption with malformed access code");
            return Err(AccessError::NotFound);
        };

        let code = self
            .access_codes
            .find_by_id(id)
            .await?
            .ok_or(AccessError::NotFound)?;

        let now = self.clock.now();
        if !code.is_valid_at(now) {
            audit_rejection(&code, now, rejection_reason(&code, now));
            return Err(AccessError::InvalidCode);
        }

        // Compare-and-swap at the store; losing means another redeemer got here first.
        if !self.access_codes.consume(id, now).await? {
            audit_rejection(&code, now, "consumed concurrently");
            return Err(AccessError::InvalidCode);
        }

        Ok(code.email)
    }
}

fn rejection_reason(code: &AccessCode, now: DateTime<Utc>) -> &'static str {
    match (code.used, code.is_expired_at(now)) {
        (true, true) => "used and expired",
        (true, false) => "already used",
        _ => "expired",
    }
}

fn audit_rejection(code: &AccessCode, now: DateTime<Utc>, reason: &'static str) {
    warn!(
        code_id = %code.id,
        email = %code.email,
        expires_at = %code.expires_at,
        now = %now,
        reason,
        "rejected access code redemption"
    );
}
