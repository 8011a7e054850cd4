//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`auth`** - Bearer token extraction for protected routes
//!
//! # Example
//!
//! ```rust,no_run
//! use chatrelay::backend::middleware::AuthUser;
//!
//! async fn whoami(AuthUser { user_id }: AuthUser) -> String {
//!     user_id.to_string()
//! }
//! ```

pub mod auth;

pub use auth::{bearer_token, AuthUser};
