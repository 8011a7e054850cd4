//! Backend Module
//!
//! This module contains all server-side code: an Axum HTTP service that
//! registers users, issues bearer tokens, relays chat turns to AI providers,
//! and keeps one transcript per user.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, app creation
//! - **`routes`** - Route configuration and router assembly
//! - **`auth`** - Credential store, tokens, register and login handlers
//! - **`chat`** - Transcript model, transcript store, chat handlers
//! - **`providers`** - Provider gateway (Wenxin, DeepSeek, Tongyi)
//! - **`middleware`** - Bearer token extraction
//! - **`error`** - Backend error types and their HTTP rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Configuration, state, initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── chat/           - Transcripts and chat handlers
//! ├── providers/      - AI provider integrations
//! ├── middleware/     - Request extractors
//! └── error/          - Error types
//! ```
//!
//! # Storage
//!
//! With `DATABASE_URL` set, users and transcripts live in Postgres (sqlx,
//! migrations applied at startup). Without it, both stores are in-memory
//! maps and all data is lost on restart.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Chat transcripts and handlers
pub mod chat;

/// AI provider gateway
pub mod providers;

/// Request extractors
pub mod middleware;

/// Backend error types
pub mod error;

pub use error::BackendError;
pub use server::{create_app, AppState};
