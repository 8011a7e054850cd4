//! Server Module
//!
//! This module contains the code that assembles the running service.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and its constructors
//! ├── config.rs       - Environment configuration and database loading
//! └── init.rs         - State construction and app creation
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use chatrelay::backend::server::{config::AppConfig, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::AppConfig;
pub use init::{build_state, create_app, InitError};
pub use state::AppState;
