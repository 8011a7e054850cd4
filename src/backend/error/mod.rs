//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are returned from HTTP handlers and converted to HTTP
//! responses at the boundary.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - BackendError and StoreError
//! └── conversion.rs - IntoResponse and the 404 fallback
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{BackendError, StoreError};
pub use conversion::route_not_found;
