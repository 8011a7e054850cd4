//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── register.rs - User registration handler
//! └── login.rs    - User authentication handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /register - User registration
//! - **`login`** - POST /login - Exchange credentials for a bearer token

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

// Re-export commonly used types
pub use types::{LoginRequest, RegisterRequest, TokenResponse};

// Re-export handlers
pub use login::login;
pub use register::register;
