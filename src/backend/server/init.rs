/**
 * Server Initialization
 *
 * This module builds the application state from an `AppConfig` and wires
 * it into the router.
 *
 * # Initialization Process
 *
 * 1. Connect to Postgres and run migrations when `database_url` is set,
 *    otherwise fall back to in-memory stores
 * 2. Build the token service
 * 3. Register the configured providers
 * 4. Create the router
 */

use std::sync::Arc;

use axum::Router;
use thiserror::Error;

use crate::backend::auth::{InMemoryUserStore, PgUserStore, TokenService, UserStore};
use crate::backend::chat::{InMemoryTranscriptStore, PgTranscriptStore, TranscriptStore};
use crate::backend::providers::ProviderRegistry;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, AppConfig, ConfigError};
use crate::backend::server::state::AppState;

/// Startup failure
#[derive(Debug, Error)]
pub enum InitError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("http client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Build `AppState` from configuration
pub async fn build_state(config: &AppConfig) -> Result<AppState, InitError> {
    config.validate()?;

    let (users, transcripts): (Arc<dyn UserStore>, Arc<dyn TranscriptStore>) =
        match &config.database_url {
            Some(url) => {
                let pool = load_database(url).await?;
                tracing::info!("Connected to database, migrations applied");
                (
                    Arc::new(PgUserStore::new(pool.clone())),
                    Arc::new(PgTranscriptStore::new(pool)),
                )
            }
            None => {
                tracing::warn!("DATABASE_URL not set, using in-memory stores; data is lost on restart");
                (
                    Arc::new(InMemoryUserStore::new()),
                    Arc::new(InMemoryTranscriptStore::new()),
                )
            }
        };

    let client = reqwest::Client::builder().build()?;
    let providers = ProviderRegistry::from_settings(&config.providers, client);
    if providers.is_empty() {
        tracing::warn!("No AI providers configured; every chat turn will be rejected");
    } else {
        tracing::info!(providers = ?providers.names(), "AI providers registered");
    }

    Ok(AppState::new(
        users,
        transcripts,
        TokenService::new(&config.jwt_secret, config.token_ttl),
        providers,
        config.bcrypt_cost,
    ))
}

/// Create and configure the Axum application
pub async fn create_app(config: &AppConfig) -> Result<Router<()>, InitError> {
    tracing::info!("Initializing chat relay backend");
    let state = build_state(config).await?;
    Ok(create_router(state))
}
