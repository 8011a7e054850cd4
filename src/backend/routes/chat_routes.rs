/**
 * Chat Routes
 *
 * - `POST /chat` - Relay one chat turn to the selected provider
 * - `GET /chat/history` - The caller's transcript
 * - `DELETE /chat/history` - Delete the caller's transcript
 * - `DELETE /chat/message/{message_id}` - Delete one message
 *
 * Every route requires a bearer token; the handlers take `AuthUser`.
 */

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::backend::chat::handlers::{chat_turn, delete_history, delete_message, get_history};
use crate::backend::server::state::AppState;

/// Add the chat routes to `router`
pub fn configure_chat_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/chat", post(chat_turn))
        .route("/chat/history", get(get_history).delete(delete_history))
        .route("/chat/message/{message_id}", delete(delete_message))
}
