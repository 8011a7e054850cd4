/**
 * Application State Management
 *
 * This module defines the application state structure shared by every
 * handler through `State<AppState>`.
 *
 * # Architecture
 *
 * `AppState` is the central state container, holding:
 * - The credential store
 * - The transcript store
 * - The token service
 * - The provider registry
 *
 * Stores are trait objects so the same handlers run against Postgres in
 * production and in-memory maps in tests or database-less deployments.
 *
 * # Example
 *
 * ```rust
 * use chatrelay::backend::server::state::AppState;
 * use axum::extract::State;
 *
 * async fn handler(State(state): State<AppState>) -> String {
 *     state.providers.names().join(",")
 * }
 * ```
 */

use std::sync::Arc;

use crate::backend::auth::{InMemoryUserStore, TokenService, UserStore};
use crate::backend::chat::{InMemoryTranscriptStore, TranscriptStore};
use crate::backend::providers::ProviderRegistry;
use crate::backend::server::config::TOKEN_TTL;

/// bcrypt cost used by `AppState::in_memory`
const IN_MEMORY_BCRYPT_COST: u32 = 4;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub transcripts: Arc<dyn TranscriptStore>,
    pub tokens: TokenService,
    pub providers: ProviderRegistry,
    pub bcrypt_cost: u32,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserStore>,
        transcripts: Arc<dyn TranscriptStore>,
        tokens: TokenService,
        providers: ProviderRegistry,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            users,
            transcripts,
            tokens,
            providers,
            bcrypt_cost,
        }
    }

    /// State backed by empty in-memory stores and no providers
    ///
    /// Uses the minimum bcrypt cost, so it is only suitable for tests and
    /// local runs.
    pub fn in_memory(jwt_secret: &str) -> Self {
        Self::new(
            Arc::new(InMemoryUserStore::new()),
            Arc::new(InMemoryTranscriptStore::new()),
            TokenService::new(jwt_secret, TOKEN_TTL),
            ProviderRegistry::new(),
            IN_MEMORY_BCRYPT_COST,
        )
    }

    /// Replace the provider registry
    pub fn with_providers(mut self, providers: ProviderRegistry) -> Self {
        self.providers = providers;
        self
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("tokens", &self.tokens)
            .field("providers", &self.providers)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish_non_exhaustive()
    }
}
