/**
 * Delete-One-Message Handler
 *
 * DELETE /chat/message/{message_id} removes a single message from the
 * caller's transcript, keeping the order of the remaining messages.
 */

use axum::extract::{Path, State};
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;

/// Confirmation text for a successful delete
pub const MESSAGE_DELETED: &str = "message deleted";

const CONTEXT: &str = "delete failed";

/// Delete one message by ID
///
/// # Errors
///
/// * `404 not_found` - The caller has no transcript, or it holds no message
///   with this ID (a malformed ID cannot match and is reported the same way)
/// * `500 internal` - Store failure
pub async fn delete_message(
    State(state): State<AppState>,
    AuthUser { user_id }: AuthUser,
    Path(message_id): Path<String>,
) -> Result<&'static str, BackendError> {
    let mut transcript = state
        .transcripts
        .find_by_user(user_id)
        .await
        .map_err(|e| BackendError::internal(CONTEXT, e))?
        .ok_or_else(|| BackendError::not_found("transcript not found"))?;

    let message_id = Uuid::parse_str(&message_id)
        .map_err(|_| BackendError::not_found("message not found"))?;

    transcript
        .remove_message(message_id)
        .ok_or_else(|| BackendError::not_found("message not found"))?;

    let removed = state
        .transcripts
        .remove_message(user_id, message_id)
        .await
        .map_err(|e| BackendError::internal(CONTEXT, e))?;
    if !removed {
        // Deleted concurrently between the read and the write
        return Err(BackendError::not_found("message not found"));
    }

    tracing::info!(
        user_id = %user_id,
        message_id = %message_id,
        remaining = transcript.len(),
        "Message deleted"
    );

    Ok(MESSAGE_DELETED)
}
