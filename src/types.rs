// src/types.rs
//! Domain-specific newtypes for type safety and validation.

use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Validation failures raised by newtype constructors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid API token: {reason}")]
    InvalidToken { reason: String },

    #[error("Invalid block id '{id}': {reason}")]
    InvalidBlockId { id: String, reason: String },

    #[error("Invalid host endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}

/// Bearer token for the outline host's HTTP API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Create a new API token with validation.
    pub fn new(token: impl Into<String>) -> Result<Self, ValidationError> {
        let token = token.into();

        if token.is_empty() {
            return Err(ValidationError::InvalidToken {
                reason: "token cannot be empty".to_string(),
            });
        }

        if token.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidToken {
                reason: "token must not contain whitespace".to_string(),
            });
        }

        Ok(Self(token))
    }

    /// Get the token as a string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Redact the token in display
        let prefix: String = self.0.chars().take(4).collect();
        write!(f, "{}...", prefix)
    }
}

/// Identifier of one outline block.
///
/// The host hands out UUIDs for blocks, but older graphs also carry
/// plain numeric database ids, so anything without whitespace is
/// accepted. Dashed 36-character values must parse as a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockId(String);

impl BlockId {
    /// Parse a block identifier from raw host input.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let input = input.trim();

        if input.is_empty() {
            return Err(ValidationError::InvalidBlockId {
                id: input.to_string(),
                reason: "id cannot be empty".to_string(),
            });
        }

        if input.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidBlockId {
                id: input.to_string(),
                reason: "id must not contain whitespace".to_string(),
            });
        }

        if input.len() == 36 && input.contains('-') {
            Uuid::parse_str(input).map_err(|e| ValidationError::InvalidBlockId {
                id: input.to_string(),
                reason: format!("not a valid UUID: {}", e),
            })?;
        }

        Ok(Self(input.to_string()))
    }

    /// Get the id as a string reference.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
