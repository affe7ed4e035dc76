// src/error.rs
//! Application error types with structured error handling.
//!
//! Error types form the vocabulary for failure modes in the system.
//! Each variant tells the story of what went wrong and where.

use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Host API returned an error ({status}): {message}")]
    HostService {
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("Malformed host response: {0}")]
    MalformedResponse(String),

    #[error("Block not found: {0}")]
    BlockNotFound(String),

    #[error("Error interacting with clipboard: {0}")]
    Clipboard(String),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),
}

impl From<arboard::Error> for AppError {
    fn from(err: arboard::Error) -> Self {
        AppError::Clipboard(format!("Clipboard error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

impl AppError {
    /// Whether this error means the requested block simply doesn't exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::BlockNotFound(_))
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;
