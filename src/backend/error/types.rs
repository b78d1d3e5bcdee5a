/**
 * Backend Error Types
 *
 * This module defines the error type returned by every HTTP handler.
 *
 * # Error Categories
 *
 * - `ValidationFailed` - malformed or missing payload fields (422)
 * - `Conflict` - name already taken, or an identity that is not a
 *   registered participant (409)
 * - `NotFound` - no such resource (404)
 * - `Persistence` - the store failed (500)
 *
 * Read paths surface store failures the same way write paths do; nothing
 * is only logged.
 */

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::store::StoreError;
use crate::shared::ValidationErrors;

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// Payload failed schema validation
    #[error(transparent)]
    ValidationFailed(#[from] ValidationErrors),

    /// Request conflicts with current participant state
    #[error("Conflict: {message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Resource does not exist
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Store failure
    #[error(transparent)]
    Persistence(#[from] StoreError),
}

impl BackendError {
    /// Create a new conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Conflict raised when `user` is not a registered participant
    pub fn unknown_participant(user: Option<&str>) -> Self {
        match user {
            Some(user) => Self::conflict(format!("participant '{user}' is not registered")),
            None => Self::conflict("missing 'user' header"),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `ValidationFailed` - 422 Unprocessable Entity
    /// - `Conflict` - 409 Conflict
    /// - `NotFound` - 404 Not Found
    /// - `Persistence` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationFailed(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message
    ///
    /// Store failures are reported generically; their detail goes to the
    /// log, not to the client.
    pub fn message(&self) -> String {
        match self {
            Self::ValidationFailed(_) => "Validation failed".to_string(),
            Self::Conflict { message } | Self::NotFound { message } => message.clone(),
            Self::Persistence(_) => "Internal server error".to_string(),
        }
    }

    /// Per-field reasons, empty for non-validation errors
    pub fn details(&self) -> Vec<String> {
        match self {
            Self::ValidationFailed(errors) => errors.details(),
            _ => Vec::new(),
        }
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        Self::ValidationFailed(ValidationErrors::single("value", rejection.body_text()))
    }
}

impl From<QueryRejection> for BackendError {
    fn from(rejection: QueryRejection) -> Self {
        Self::ValidationFailed(ValidationErrors::single("query", rejection.body_text()))
    }
}
