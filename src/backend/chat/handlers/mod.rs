//! Chat Handlers Module
//!
//! This module contains all Axum handlers for the chat endpoints. Every
//! handler requires a bearer token, checked by the `AuthUser` extractor
//! before the body is read.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs     - Module exports and documentation
//! ├── types.rs   - Request and response types
//! ├── turn.rs    - POST /chat
//! ├── history.rs - GET and DELETE /chat/history
//! └── delete.rs  - DELETE /chat/message/{message_id}
//! ```
//!
//! # Dependencies
//!
//! - `backend::server::state` - Application state (stores, providers)
//! - `backend::middleware` - Bearer token extraction
//! - `backend::providers` - Provider gateway

/// Request and response types
pub mod types;

/// Chat turn handler
pub mod turn;

/// History fetch and delete handlers
pub mod history;

/// Delete-one-message handler
pub mod delete;

pub use delete::delete_message;
pub use history::{delete_history, get_history};
pub use turn::chat_turn;
pub use types::{ChatRequest, ChatResponse, HistoryResponse};
