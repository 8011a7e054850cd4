/**
 * Chat Handler Types
 *
 * Request and response bodies for the chat endpoints.
 */

use serde::{Deserialize, Serialize};

use crate::shared::Message;

/// Chat turn request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ChatRequest {
    /// User message text (must not be empty)
    pub message: String,
    /// Provider selector, e.g. `"wenxin"`, `"deepseek"`, `"tongyi"`
    pub model: String,
}

/// Chat turn response
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ChatResponse {
    pub reply: String,
}

/// Full transcript in conversation order
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HistoryResponse {
    pub messages: Vec<Message>,
}
