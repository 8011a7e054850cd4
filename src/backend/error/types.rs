/**
 * Backend Error Types
 *
 * This module defines the error taxonomy used by the HTTP handlers and the
 * persistence error type shared by the user and transcript stores.
 *
 * # Error Categories
 *
 * ## Validation / Conflict
 *
 * - Duplicate email on registration
 * - Other registration failures (carrying the underlying message)
 * - Invalid field values (empty chat message)
 *
 * ## Authentication
 *
 * - Bad email/password pair
 * - Missing or malformed `Authorization` header
 * - Token that fails verification (bad signature, expired)
 *
 * ## Not Found
 *
 * - Missing transcript or message on delete-by-id
 *
 * ## Upstream
 *
 * - Provider gateway failures and unsupported provider selectors
 *
 * ## Internal
 *
 * - Uncategorized store or runtime failures, tagged with the operation that
 *   was running ("chat failed", "login failed", ...)
 */

use axum::{extract::rejection::JsonRejection, http::StatusCode};
use thiserror::Error;

use crate::shared::SharedError;

/// Persistence error shared by all stores
#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness constraint was violated
    #[error("duplicate {field}")]
    Duplicate {
        /// Name of the field whose constraint was hit
        field: &'static str,
    },

    /// A stored row could not be mapped back into a domain value
    #[error("corrupt record: {0}")]
    Corrupt(String),

    /// Underlying database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Backend-specific error types
///
/// Each variant maps to one HTTP status and one stable machine-readable code.
///
/// # Usage
///
/// ```rust
/// use chatrelay::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::not_found("message not found");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// assert_eq!(err.code(), "not_found");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Registration attempted with an email that already exists
    #[error("duplicate email")]
    DuplicateEmail,

    /// Any other registration failure
    #[error("registration failed: {message}")]
    RegistrationFailed {
        /// Underlying failure message
        message: String,
    },

    /// No user matches the supplied email and password
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Missing or malformed bearer header
    #[error("unauthorized")]
    Unauthorized,

    /// Bearer token present but failed verification
    #[error("invalid token: {message}")]
    InvalidToken {
        /// Verification failure message
        message: String,
    },

    /// Requested transcript or message does not exist
    #[error("{message}")]
    NotFound {
        /// What was not found
        message: String,
    },

    /// Provider selector with no registered integration
    #[error("unsupported provider: {provider}")]
    UnsupportedProvider {
        /// The selector that was sent
        provider: String,
    },

    /// The provider gateway call failed
    #[error("AI invocation failed: {message}")]
    UpstreamFailure {
        /// Underlying provider error message
        message: String,
    },

    /// Uncategorized failure during an operation
    #[error("{context}: {message}")]
    Internal {
        /// Operation that was running, e.g. "chat failed"
        context: &'static str,
        /// Underlying failure message
        message: String,
    },

    /// Shared error (validation)
    #[error(transparent)]
    SharedError(#[from] SharedError),
}

/// A body that is missing, not JSON, or lacks a field is a validation failure
impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        SharedError::validation("body", rejection.body_text()).into()
    }
}

impl BackendError {
    pub fn registration_failed(message: impl ToString) -> Self {
        Self::RegistrationFailed {
            message: message.to_string(),
        }
    }

    pub fn invalid_token(message: impl ToString) -> Self {
        Self::InvalidToken {
            message: message.to_string(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn unsupported_provider(provider: impl Into<String>) -> Self {
        Self::UnsupportedProvider {
            provider: provider.into(),
        }
    }

    pub fn upstream(message: impl ToString) -> Self {
        Self::UpstreamFailure {
            message: message.to_string(),
        }
    }

    /// Create an internal error tagged with the failing operation
    ///
    /// ```rust
    /// use chatrelay::backend::error::BackendError;
    ///
    /// let err = BackendError::internal("chat failed", "connection reset");
    /// assert_eq!(err.message(), "chat failed: connection reset");
    /// ```
    pub fn internal(context: &'static str, message: impl ToString) -> Self {
        Self::Internal {
            context,
            message: message.to_string(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `DuplicateEmail`, `RegistrationFailed`, `InvalidCredentials` - 400
    /// - `Unauthorized`, `InvalidToken` - 401
    /// - `NotFound` - 404
    /// - `UnsupportedProvider` - 400
    /// - `UpstreamFailure`, `Internal` - 500
    /// - `SharedError` - 400
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::DuplicateEmail
            | Self::RegistrationFailed { .. }
            | Self::InvalidCredentials
            | Self::UnsupportedProvider { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized | Self::InvalidToken { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::UpstreamFailure { .. } | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::SharedError(SharedError::ValidationError { .. }) => StatusCode::BAD_REQUEST,
        }
    }

    /// Stable machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateEmail => "duplicate_email",
            Self::RegistrationFailed { .. } => "registration_failed",
            Self::InvalidCredentials => "invalid_credentials",
            Self::Unauthorized => "unauthorized",
            Self::InvalidToken { .. } => "invalid_token",
            Self::NotFound { .. } => "not_found",
            Self::UnsupportedProvider { .. } => "unsupported_provider",
            Self::UpstreamFailure { .. } => "upstream_failure",
            Self::Internal { .. } => "internal",
            Self::SharedError(SharedError::ValidationError { .. }) => "validation",
        }
    }

    /// Human-readable error message
    pub fn message(&self) -> String {
        self.to_string()
    }
}
