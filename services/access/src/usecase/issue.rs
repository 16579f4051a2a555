use tracing::debug;

use crate::domain::frequency::{Clock, start_of_next_day};
use crate::domain::repository::AccessCodeRepository;
use crate::domain::types::{AccessCode, AccessCodeId};
use crate::error::AccessError;

pub struct IssueCodeInput {
    pub email: String,
}

pub struct IssueCodeUseCase<A, C>
where
    A: AccessCodeRepository,
    C: Clock,
{
    pub access_codes: A,
    pub clock: C,
}

impl<A, C> IssueCodeUseCase<A, C>
where
    A: AccessCodeRepository,
    C: Clock,
{
    pub async fn execute(&self, input: IssueCodeInput) -> Result<AccessCodeId, AccessError> {
        let email = input.email.trim();
        if email.is_empty() {
            return Err(AccessError::EmptyEmail);
        }

        let now = self.clock.now();
        let code = AccessCode {
            id: AccessCodeId::generate(),
            email: email.to_owned(),
            used: false,
            expires_at: start_of_next_day(now),
            created_at: now,
        };

        // No retry on failure, including an id collision; the caller decides.
        self.access_codes.insert(&code).await?;

        debug!(email = %code.email, expires_at = %code.expires_at, "issued access code");
        Ok(code.id)
    }
}
