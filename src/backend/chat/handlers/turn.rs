/**
 * Chat Turn Handler
 *
 * This module implements POST /chat: record the user's message, relay it to
 * the selected provider together with the whole transcript, then record and
 * return the reply.
 *
 * # Persistence
 *
 * A successful turn performs two appends to the transcript. The user message
 * is written before the provider is called, so a provider failure leaves the
 * user message recorded with no reply after it. Each append is atomic on its
 * own; the pair is not.
 *
 * # Concurrency
 *
 * Two concurrent turns for the same user are not serialized and may
 * interleave their appends.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::chat::handlers::types::{ChatRequest, ChatResponse};
use crate::backend::chat::transcript::Transcript;
use crate::backend::error::{BackendError, StoreError};
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::{Message, SharedError};

fn chat_failed(err: StoreError) -> BackendError {
    BackendError::internal("chat failed", err)
}

/// Chat turn handler
///
/// # Errors
///
/// * `401 unauthorized` / `401 invalid_token` - From the `AuthUser` extractor
/// * `400 validation` - Malformed body or empty message text
/// * `400 unsupported_provider` - No provider registered for `model`; nothing is written
/// * `500 upstream_failure` - Provider call failed; the user message stays recorded
/// * `500 internal` - Store failure
///
/// # Example Request
///
/// ```http
/// POST /chat HTTP/1.1
/// Authorization: Bearer eyJhbGciOi...
/// Content-Type: application/json
///
/// { "message": "hello", "model": "wenxin" }
/// ```
pub async fn chat_turn(
    State(state): State<AppState>,
    AuthUser { user_id }: AuthUser,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, BackendError> {
    let Json(request) = body?;
    if request.message.is_empty() {
        return Err(SharedError::validation("message", "message must not be empty").into());
    }

    let provider = state
        .providers
        .get(&request.model)
        .ok_or_else(|| BackendError::unsupported_provider(&request.model))?;

    let mut transcript = state
        .transcripts
        .find_by_user(user_id)
        .await
        .map_err(chat_failed)?
        .unwrap_or_else(|| Transcript::new(user_id));

    let user_message = Message::user(request.message.clone());
    state
        .transcripts
        .append_message(user_id, &user_message)
        .await
        .map_err(chat_failed)?;
    transcript.push(user_message);
    let history = transcript.history();

    tracing::debug!(
        user_id = %user_id,
        provider = provider.name(),
        turns = history.len(),
        "Dispatching chat turn"
    );

    let reply = provider
        .generate_reply(&request.message, &history)
        .await
        .map_err(BackendError::upstream)?;
    if reply.is_empty() {
        return Err(BackendError::upstream("provider returned an empty reply"));
    }

    let ai_message = Message::ai(reply.clone());
    state
        .transcripts
        .append_message(user_id, &ai_message)
        .await
        .map_err(chat_failed)?;
    transcript.push(ai_message);

    tracing::info!(
        user_id = %user_id,
        provider = provider.name(),
        messages = transcript.len(),
        "Chat turn recorded"
    );

    Ok(Json(ChatResponse { reply }))
}
