use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};

use newsalert_access::domain::frequency::Clock;
use newsalert_access::domain::repository::AccessCodeRepository;
use newsalert_access::domain::types::{AccessCode, AccessCodeId};
use newsalert_access::error::AccessError;
use newsalert_access::store::AccessStore;

// ── MockAccessCodeRepo ───────────────────────────────────────────────────────

/// In-memory repository. `consume` runs under the lock so it behaves like the
/// conditional update a real store performs.
#[derive(Clone, Default)]
pub struct MockAccessCodeRepo {
    pub codes: Arc<Mutex<Vec<AccessCode>>>,
    pub unavailable: bool,
}

impl MockAccessCodeRepo {
    pub fn new(codes: Vec<AccessCode>) -> Self {
        Self {
            codes: Arc::new(Mutex::new(codes)),
            unavailable: false,
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Every operation fails as if the store were unreachable.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::empty()
        }
    }

    /// Returns a shared handle to the internal code list for post-execution inspection.
    pub fn codes_handle(&self) -> Arc<Mutex<Vec<AccessCode>>> {
        Arc::clone(&self.codes)
    }

    fn check_available(&self) -> Result<(), AccessError> {
        if self.unavailable {
            return Err(anyhow::anyhow!("store unavailable").into());
        }
        Ok(())
    }
}

impl AccessCodeRepository for MockAccessCodeRepo {
    async fn ensure_schema(&self) -> Result<(), AccessError> {
        self.check_available()
    }

    async fn insert(&self, code: &AccessCode) -> Result<(), AccessError> {
        self.check_available()?;
        let mut codes = self.codes.lock().unwrap();
        if codes.iter().any(|c| c.id == code.id) {
            return Err(anyhow::anyhow!("duplicate key {}", code.id).into());
        }
        codes.push(code.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: AccessCodeId) -> Result<Option<AccessCode>, AccessError> {
        self.check_available()?;
        Ok(self
            .codes
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn consume(&self, id: AccessCodeId, now: DateTime<Utc>) -> Result<bool, AccessError> {
        self.check_available()?;
        let mut codes = self.codes.lock().unwrap();
        match codes.iter_mut().find(|c| c.id == id) {
            Some(c) if !c.used && c.expires_at > now => {
                c.used = true;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn list_expired_unused(
        &self,
        now: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<AccessCode>, AccessError> {
        self.check_available()?;
        let mut expired: Vec<AccessCode> = self
            .codes
            .lock()
            .unwrap()
            .iter()
            .filter(|c| !c.used && c.expires_at < now)
            .cloned()
            .collect();
        expired.sort_by_key(|c| c.expires_at);
        expired.truncate(limit as usize);
        Ok(expired)
    }
}

// ── TestClock ────────────────────────────────────────────────────────────────

/// Manually driven clock shared between the store and the test body.
#[derive(Clone)]
pub struct TestClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl TestClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(now)),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap() = now;
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock().unwrap() += by;
    }
}

impl Clock for TestClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

/// 2026-10-19 14:30:00 UTC — mid-afternoon, well clear of a day boundary.
pub fn issued_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 14, 30, 0).unwrap()
}

/// Start of the UTC day after `issued_at()`.
pub fn next_midnight() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 20, 0, 0, 0).unwrap()
}

pub fn test_access_code(email: &str, used: bool, expires_at: DateTime<Utc>) -> AccessCode {
    AccessCode {
        id: AccessCodeId::generate(),
        email: email.to_owned(),
        used,
        expires_at,
        created_at: expires_at - Duration::hours(10),
    }
}

pub fn mock_store() -> (
    AccessStore<MockAccessCodeRepo, TestClock>,
    MockAccessCodeRepo,
    TestClock,
) {
    let repo = MockAccessCodeRepo::empty();
    let clock = TestClock::at(issued_at());
    let store = AccessStore::new(repo.clone(), clock.clone());
    (store, repo, clock)
}
