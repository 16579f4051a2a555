/// Trait for loading service configuration from environment variables.
///
/// Implementors derive `serde::Deserialize` and call `Config::from_env()` (or
/// `from_env_prefixed`) at startup. Field names map to upper-cased env vars,
/// so `database_url` reads `DATABASE_URL` (or `ACCESS_DATABASE_URL` with an
/// `ACCESS_` prefix).
pub trait Config: Sized + serde::de::DeserializeOwned {
    fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }

    fn from_env_prefixed(prefix: &str) -> Result<Self, envy::Error> {
        envy::prefixed(prefix).from_env()
    }
}
