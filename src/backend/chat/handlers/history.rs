/**
 * History Handlers
 *
 * GET /chat/history returns the caller's transcript; DELETE /chat/history
 * removes it. A user without a transcript gets an empty list, and deleting a
 * missing transcript succeeds.
 */

use axum::{extract::State, response::Json};

use crate::backend::chat::handlers::types::HistoryResponse;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;

/// Confirmation text for DELETE /chat/history
pub const HISTORY_DELETED: &str = "all chat history deleted";

/// Fetch the caller's full transcript
pub async fn get_history(
    State(state): State<AppState>,
    AuthUser { user_id }: AuthUser,
) -> Result<Json<HistoryResponse>, BackendError> {
    let messages = state
        .transcripts
        .find_by_user(user_id)
        .await
        .map_err(|e| BackendError::internal("failed to fetch history", e))?
        .map(|transcript| transcript.messages)
        .unwrap_or_default();

    Ok(Json(HistoryResponse { messages }))
}

/// Delete the caller's transcript, if any
pub async fn delete_history(
    State(state): State<AppState>,
    AuthUser { user_id }: AuthUser,
) -> Result<&'static str, BackendError> {
    let existed = state
        .transcripts
        .delete_by_user(user_id)
        .await
        .map_err(|e| BackendError::internal("delete failed", e))?;

    tracing::info!(user_id = %user_id, existed, "Chat history deleted");

    Ok(HISTORY_DELETED)
}
