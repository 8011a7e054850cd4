//! Authentication Module
//!
//! This module handles user registration, login and bearer-token management.
//!
//! # Architecture
//!
//! - **`users`** - User record and the credential store (Postgres or in-memory)
//! - **`sessions`** - JWT token issuance and verification
//! - **`handlers`** - HTTP handlers for `/register` and `/login`
//!
//! # Authentication Flow
//!
//! 1. **Register**: email + password → bcrypt digest stored → 201
//! 2. **Login**: email + password → digest verified → one-hour JWT returned
//! 3. **Protected routes**: `Authorization: Bearer <token>` → verified by the
//!    `AuthUser` extractor in `backend::middleware`
//!
//! # Security
//!
//! - Passwords are stored only as salted bcrypt digests
//! - Unknown email and wrong password return the same error
//! - Tokens are HS256-signed with the configured secret and expire after one hour

/// User model and credential store
pub mod users;

/// JWT token management
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{login, register};
pub use sessions::{Claims, TokenError, TokenService};
pub use users::{InMemoryUserStore, PgUserStore, User, UserStore};
