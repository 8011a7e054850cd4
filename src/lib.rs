//! ChatRelay - Main Library
//!
//! ChatRelay is an HTTP backend that authenticates users, keeps one chat
//! transcript per user, and relays each chat turn to an external
//! conversational AI provider, persisting both sides of the exchange.
//!
//! # Module Structure
//!
//! - **`shared`** - Types that do not depend on the server
//!   - Transcript messages and roles
//!   - Shared error types
//!
//! - **`backend`** - The Axum server
//!   - Registration, login and bearer-token verification
//!   - Transcript persistence (Postgres or in-memory)
//!   - Provider gateway (Wenxin, DeepSeek, Tongyi)
//!   - Error taxonomy and HTTP conversion
//!
//! # Usage
//!
//! ```rust,no_run
//! use chatrelay::backend::server::{config::AppConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```

/// Types shared between the server and its clients
pub mod shared;

/// Server-side code
pub mod backend;
