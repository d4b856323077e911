/// Application errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Unknown state: {0}")]
    UnknownState(String),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    #[error("Secret resolution failed: {0}")]
    SecretResolution(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Whether the error should fail the whole invocation.
    ///
    /// Secret resolution failures are reported through the returned status
    /// payload instead, since no HTTP exchange could take place.
    pub fn fails_invocation(&self) -> bool {
        !matches!(self, AppError::SecretResolution(_))
    }
}

/// Result type alias used across the crate
pub type AppResult<T> = Result<T, AppError>;
