/**
 * Backend Error Types
 *
 * This module defines the single error type returned by every service and
 * handler in the backend. Each variant maps onto one HTTP status code and
 * one GraphQL error code.
 *
 * # Error Categories
 *
 * - `Unauthenticated` (401) - missing, malformed, forged or expired credential
 * - `Forbidden` (403) - authenticated, but not the owner of the resource
 * - `InvalidInput` (422) - carries every field-level violation
 * - `NotFound` (404) - the addressed resource does not exist
 * - `Conflict` (409) - email already registered
 * - `Internal` (500) - anything unexpected; the details are logged, never returned
 *
 * # Propagation
 *
 * Validation and authorization failures are raised immediately and never
 * retried. Storage failures become `Internal` unless they are a known
 * conflict.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::store::StoreError;
use crate::shared::Violation;

/// Message returned to clients for every internal failure
pub const INTERNAL_MESSAGE: &str = "An internal error occurred.";

/// Result alias used throughout the backend
pub type BackendResult<T> = Result<T, BackendError>;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use feedhub::backend::error::BackendError;
///
/// let err = BackendError::not_found("Could not find post.");
/// assert_eq!(err.status_code().as_u16(), 404);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Missing or invalid identity token
    #[error("Unauthenticated: {message}")]
    Unauthenticated { message: String },

    /// Caller is not the owner of the resource
    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    /// Request payload failed validation
    #[error("Invalid input: {message} ({} violations)", violations.len())]
    InvalidInput {
        message: String,
        violations: Vec<Violation>,
    },

    /// Resource does not exist
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// Resource already exists
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// Unexpected failure
    ///
    /// The message is for the server log only.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl BackendError {
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Create a validation error carrying every violation found
    pub fn invalid_input(message: impl Into<String>, violations: Vec<Violation>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            violations,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create an internal error and log its details
    pub fn internal(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::error!("Internal error: {}", message);
        Self::Internal { message }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthenticated { .. } => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::InvalidInput { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the user-visible error message
    ///
    /// Internal errors never expose their details.
    pub fn message(&self) -> String {
        match self {
            Self::Unauthenticated { message }
            | Self::Forbidden { message }
            | Self::InvalidInput { message, .. }
            | Self::NotFound { message }
            | Self::Conflict { message } => message.clone(),
            Self::Internal { .. } => INTERNAL_MESSAGE.to_string(),
        }
    }

    /// Field-level violations, empty for anything but `InvalidInput`
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::InvalidInput { violations, .. } => violations,
            _ => &[],
        }
    }
}

impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict(message) => Self::conflict(message),
            other => Self::internal(format!("store failure: {}", other)),
        }
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(format!("serialization failure: {}", err))
    }
}
