//! Shared Module
//!
//! This module contains types that do not depend on the HTTP server or the
//! database: transcript messages and their roles, and shared error types.
//! They are serialized directly in API responses and sent to providers.

/// Message data structure
pub mod message;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use message::{HistoryTurn, Message, Role};
pub use error::SharedError;
