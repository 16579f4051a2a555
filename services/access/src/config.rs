use std::fmt;

use anyhow::{Context as _, anyhow};
use serde::Deserialize;
use url::Url;

use newsalert_core::config::Config;

/// Access store configuration loaded from `ACCESS_*` environment variables.
#[derive(Deserialize)]
pub struct AccessConfig {
    /// Store connection URL. Env var: `ACCESS_DATABASE_URL`.
    pub database_url: String,
    /// Account name; replaces the user-info in the URL when set. Env var: `ACCESS_USERNAME`.
    #[serde(default)]
    pub username: Option<String>,
    /// Account secret; replaces the URL password when set. Env var: `ACCESS_PASSWORD`.
    #[serde(default)]
    pub password: Option<String>,
}

impl Config for AccessConfig {}

impl AccessConfig {
    pub const ENV_PREFIX: &'static str = "ACCESS_";

    pub fn load() -> anyhow::Result<Self> {
        Self::from_env_prefixed(Self::ENV_PREFIX).context("load access store config")
    }

    /// `database_url` with `username`/`password` applied.
    pub fn connection_url(&self) -> anyhow::Result<Url> {
        let mut url = Url::parse(&self.database_url).context("invalid ACCESS_DATABASE_URL")?;
        if let Some(username) = &self.username {
            url.set_username(username)
                .map_err(|()| anyhow!("ACCESS_DATABASE_URL cannot carry a username"))?;
        }
        if let Some(password) = &self.password {
            url.set_password(Some(password))
                .map_err(|()| anyhow!("ACCESS_DATABASE_URL cannot carry a password"))?;
        }
        Ok(url)
    }

    /// `database_url` with any embedded password masked, for logs.
    pub fn redacted_database_url(&self) -> String {
        match Url::parse(&self.database_url) {
            Ok(mut url) => {
                if url.password().is_some() {
                    let _ = url.set_password(Some("***"));
                }
                url.into()
            }
            Err(_) => "<invalid url>".to_owned(),
        }
    }
}

impl fmt::Debug for AccessConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessConfig")
            .field("database_url", &self.redacted_database_url())
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}
