/// Access-code subsystem error variants.
#[derive(Debug, thiserror::Error)]
pub enum AccessError {
    #[error("email must not be empty")]
    EmptyEmail,
    #[error("access code not found")]
    NotFound,
    #[error("invalid access code")]
    InvalidCode,
    #[error("storage failure")]
    Storage(#[from] anyhow::Error),
}

impl AccessError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyEmail => "EMPTY_EMAIL",
            Self::NotFound => "NOT_FOUND",
            Self::InvalidCode => "INVALID_CODE",
            Self::Storage(_) => "STORAGE_FAILURE",
        }
    }

    /// Message safe to show an end user. Unknown and spent codes read the same
    /// so callers cannot probe which codes ever existed.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::EmptyEmail => "email must not be empty",
            Self::NotFound | Self::InvalidCode => "invalid access code",
            Self::Storage(_) => "internal error",
        }
    }
}
