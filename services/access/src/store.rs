//! Entry point the surrounding application holds on to.
//!
//! Build one `AccessStore` at startup with the repository and clock it should
//! use, call `ensure_store` once, then share it across requests.

use crate::domain::frequency::{Clock, SystemClock};
use crate::domain::repository::AccessCodeRepository;
use crate::domain::types::{AccessCode, AccessCodeId};
use crate::error::AccessError;
use crate::usecase::issue::{IssueCodeInput, IssueCodeUseCase};
use crate::usecase::redeem::RedeemCodeUseCase;

#[derive(Clone)]
pub struct AccessStore<R, C = SystemClock> {
    codes: R,
    clock: C,
}

impl<R, C> AccessStore<R, C>
where
    R: AccessCodeRepository + Clone,
    C: Clock + Clone,
{
    pub fn new(codes: R, clock: C) -> Self {
        Self { codes, clock }
    }

    /// Provision the backing table and sweep index. Safe to call on every start.
    pub async fn ensure_store(&self) -> Result<(), AccessError> {
        self.codes.ensure_schema().await
    }

    /// Issue a code for `email`, valid until the next UTC midnight.
    pub async fn issue(&self, email: &str) -> Result<AccessCodeId, AccessError> {
        let usecase = IssueCodeUseCase {
            access_codes: self.codes.clone(),
            clock: self.clock.clone(),
        };
        usecase
            .execute(IssueCodeInput {
                email: email.to_owned(),
            })
            .await
    }

    /// Redeem `code_id` once, returning the email it was issued for.
    pub async fn redeem(&self, code_id: &str) -> Result<String, AccessError> {
        let usecase = RedeemCodeUseCase {
            access_codes: self.codes.clone(),
            clock: self.clock.clone(),
        };
        usecase.execute(code_id).await
    }

    /// Up to `limit` unused codes that are already past expiry.
    pub async fn expired_unused(&self, limit: u64) -> Result<Vec<AccessCode>, AccessError> {
        self.codes
            .list_expired_unused(self.clock.now(), limit)
            .await
    }
}
