//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Router assembly and outer layers
//! ├── chat_routes.rs  - Chat endpoints
//! └── api_routes.rs   - Registration and login
//! ```

/// Router assembly
pub mod router;

/// Chat endpoints
pub mod chat_routes;

/// Authentication endpoints
pub mod api_routes;

pub use router::create_router;
