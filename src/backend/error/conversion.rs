/**
 * Error Conversion
 *
 * This module converts backend errors into HTTP responses.
 *
 * # Response Format
 *
 * Error responses are returned as JSON with the following structure:
 * ```json
 * {
 *   "error": "message not found",
 *   "code": "not_found",
 *   "status": 404
 * }
 * ```
 *
 * Client-side failures are logged at `warn`, server-side failures at `error`,
 * so every failure is logged exactly once at the boundary.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();
        let code = self.code();

        if status.is_server_error() {
            tracing::error!(code, status = status.as_u16(), "{}", message);
        } else {
            tracing::warn!(code, status = status.as_u16(), "{}", message);
        }

        let body = serde_json::json!({
            "error": message,
            "code": code,
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

/// Fallback for routes that do not exist
pub async fn route_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "error": "route not found",
            "code": "not_found",
            "status": StatusCode::NOT_FOUND.as_u16(),
        })),
    )
        .into_response()
}
