//! Backend Error Types
//!
//! This module defines the errors chat handlers and services can return.
//! Each variant maps onto exactly one HTTP status:
//!
//! - `ValidationError` - malformed, missing or empty input (422)
//! - `ConflictError` - the participant name is already taken (409)
//! - `NotFoundError` - heartbeat for an unknown participant (404)
//! - `StoreError` - any failure of the backing store (500)
//! - `SharedError` - input errors from the shared module (422)

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::store::StoreError;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use roomchat::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::conflict("Ana is already in the room");
/// assert_eq!(err.status_code(), StatusCode::CONFLICT);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Request data failed validation
    #[error("Validation error: {message}")]
    ValidationError {
        /// Human-readable error message
        message: String,
    },

    /// Participant already registered
    #[error("Conflict: {message}")]
    ConflictError {
        /// Human-readable error message
        message: String,
    },

    /// Participant not registered
    #[error("Not found: {message}")]
    NotFoundError {
        /// Human-readable error message
        message: String,
    },

    /// Backing store failure
    ///
    /// The store's own message is surfaced to the client as-is.
    #[error(transparent)]
    StoreError(#[from] StoreError),

    /// Shared error (from shared module)
    #[error(transparent)]
    SharedError(#[from] SharedError),
}

impl BackendError {
    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    /// Create a new conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::ConflictError {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFoundError {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `ValidationError` / `SharedError` - 422 Unprocessable Entity
    /// - `ConflictError` - 409 Conflict
    /// - `NotFoundError` - 404 Not Found
    /// - `StoreError` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError { .. } | Self::SharedError(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Self::ConflictError { .. } => StatusCode::CONFLICT,
            Self::NotFoundError { .. } => StatusCode::NOT_FOUND,
            Self::StoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::ValidationError { message }
            | Self::ConflictError { message }
            | Self::NotFoundError { message } => message.clone(),
            Self::StoreError(err) => err.to_string(),
            Self::SharedError(err) => err.to_string(),
        }
    }
}
