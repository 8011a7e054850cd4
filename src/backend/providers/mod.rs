//! Provider Gateway Module
//!
//! This module relays chat turns to external conversational AI services.
//! Each service is one `ChatProvider` implementation; the `ProviderRegistry`
//! maps the `model` selector sent by clients to a provider.
//!
//! # Module Structure
//!
//! ```text
//! providers/
//! ├── mod.rs        - ChatProvider trait and ProviderError
//! ├── registry.rs   - Selector lookup and construction from config
//! ├── wenxin.rs     - Wenxin prompt/history endpoint
//! └── completion.rs - OpenAI-compatible chat completions (DeepSeek, Tongyi)
//! ```
//!
//! Adding a provider means adding one implementation and one registration in
//! `ProviderRegistry::from_settings`.

use async_trait::async_trait;
use thiserror::Error;

use crate::shared::HistoryTurn;

/// Provider selector lookup
pub mod registry;

/// Wenxin integration
pub mod wenxin;

/// OpenAI-compatible chat completions integration
pub mod completion;

pub use completion::CompletionProvider;
pub use registry::ProviderRegistry;
pub use wenxin::WenxinProvider;

/// Provider call failure
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport failure (connect, TLS, body decode)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status from the provider
    #[error("provider returned {status}: {body}")]
    Status {
        status: u16,
        body: String,
    },

    /// Success status but the body has no usable reply
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// A conversational AI service that can answer one chat turn
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Selector this provider is registered under
    fn name(&self) -> &str;

    /// Produce a reply to `prompt` given the conversation so far
    ///
    /// `history` is the whole transcript, oldest first, and ends with the
    /// user turn whose text is `prompt`.
    async fn generate_reply(
        &self,
        prompt: &str,
        history: &[HistoryTurn],
    ) -> Result<String, ProviderError>;
}

/// Turn a non-success response into `ProviderError::Status`
pub(crate) async fn check_status(
    response: reqwest::Response,
) -> Result<reqwest::Response, ProviderError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ProviderError::Status {
        status: status.as_u16(),
        body,
    })
}
