/**
 * Authentication Extractor
 *
 * Protected handlers take an `AuthUser` argument. The extractor reads the
 * `Authorization: Bearer <token>` header, verifies the token against the
 * application's `TokenService`, and hands the user id to the handler.
 *
 * Rejections are `BackendError`s so they share the JSON error envelope:
 * a missing or non-bearer header is `401 unauthorized`; a token that fails
 * verification (bad signature, expired, malformed subject) is
 * `401 invalid_token`.
 */

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// Authenticated caller, resolved from the bearer token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: Uuid,
}

/// Extract the raw token from an `Authorization: Bearer` header
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or(BackendError::Unauthorized)?;

        let user_id = state.tokens.user_id(token).map_err(|e| {
            tracing::warn!("Rejected token: {}", e);
            BackendError::invalid_token(e)
        })?;

        Ok(AuthUser { user_id })
    }
}
