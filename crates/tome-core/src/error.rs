use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur in Tome
#[derive(Debug, Error)]
pub enum TomeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Review not found: {0}")]
    ReviewNotFound(String),

    #[error("Sign in to like reviews")]
    SignInRequired,
}

/// Result type alias for Tome operations
pub type TomeResult<T> = Result<T, TomeError>;

impl From<std::io::Error> for TomeError {
    fn from(err: std::io::Error) -> Self {
        TomeError::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for TomeError {
    fn from(err: serde_json::Error) -> Self {
        TomeError::Persistence(err.to_string())
    }
}

impl From<toml::de::Error> for TomeError {
    fn from(err: toml::de::Error) -> Self {
        TomeError::Config(err.to_string())
    }
}

impl From<StoreError> for TomeError {
    fn from(err: StoreError) -> Self {
        TomeError::Store(err.to_string())
    }
}
