use thiserror::Error;

pub type PromoResult<T> = Result<T, PromoError>;

#[derive(Error, Debug)]
pub enum PromoError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl PromoError {
    /// Whether this error is the caller's fault (bad input) rather than a
    /// failure on our side. UnknownPlatform is a validation failure against
    /// the closed platform set.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            PromoError::Validation(_) | PromoError::UnknownPlatform(_)
        )
    }
}
