//! Shared Error Types
//!
//! Input errors raised while turning raw request data into chat types.
//! These know nothing about HTTP; the backend maps every variant onto
//! `422 Unprocessable Entity`.
//!
//! # Usage
//!
//! ```rust
//! use roomchat::shared::error::SharedError;
//!
//! let error = SharedError::validation("name", "must not be empty");
//! assert!(error.to_string().contains("name"));
//! ```
use thiserror::Error;

/// Errors produced while validating chat input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A field was missing, empty or malformed
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// A message `type` that is not one of the known kinds
    #[error("Unknown message type '{value}'")]
    UnknownMessageKind {
        /// The rejected value, as sent by the client
        value: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new unknown-kind error
    pub fn unknown_kind(value: impl Into<String>) -> Self {
        Self::UnknownMessageKind {
            value: value.into(),
        }
    }
}
