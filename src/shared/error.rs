//! Shared Error Types
//!
//! This module defines error types for failures that are not tied to HTTP or
//! persistence, such as malformed field values.
//!
//! # Usage
//!
//! ```rust
//! use chatrelay::shared::error::SharedError;
//!
//! let error = SharedError::validation("message", "message must not be empty");
//! ```
use thiserror::Error;

/// Transport-neutral error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
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
}
