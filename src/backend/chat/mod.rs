//! Chat Backend Module
//!
//! This module contains all server-side chat functionality:
//! - The per-user transcript model
//! - Transcript persistence (Postgres or in-memory)
//! - HTTP handlers for chat turns, history, and deletion
//!
//! # Architecture
//!
//! - **`transcript`** - `Transcript` and its ordering rules
//! - **`db`** - `TranscriptStore` and its implementations
//! - **`handlers`** - Axum handlers
//!
//! # Example
//!
//! ```rust
//! use chatrelay::backend::chat::Transcript;
//! use chatrelay::shared::Message;
//! use uuid::Uuid;
//!
//! let mut transcript = Transcript::new(Uuid::new_v4());
//! transcript.push(Message::user("Hello!"));
//! assert_eq!(transcript.history().len(), 1);
//! ```

/// Transcript model
pub mod transcript;

/// Transcript persistence
pub mod db;

/// Chat HTTP handlers
pub mod handlers;

/// Re-export commonly used types
pub use db::{InMemoryTranscriptStore, PgTranscriptStore, TranscriptStore};
pub use handlers::{chat_turn, delete_history, delete_message, get_history};
pub use transcript::Transcript;
