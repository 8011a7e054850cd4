/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password against the stored bcrypt digest
 * 3. Issue a one-hour bearer token embedding the user ID
 *
 * An unknown email and a wrong password produce the same error.
 */
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use bcrypt::verify;

use crate::backend::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

const CONTEXT: &str = "login failed";

/// Login handler
///
/// # Errors
///
/// * `400 validation` - If the body is not a `{email, password}` object
/// * `400 invalid_credentials` - If user is not found or password is incorrect
/// * `500 internal` - If the store, bcrypt or token signing fails
///
/// # Example Response
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
/// ```
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, BackendError> {
    let Json(request) = body?;
    tracing::info!("Login request for: {}", request.email);

    let user = state
        .users
        .find_by_email(&request.email)
        .await
        .map_err(|e| BackendError::internal(CONTEXT, e))?
        .ok_or(BackendError::InvalidCredentials)?;

    let valid = verify(&request.password, &user.password_hash)
        .map_err(|e| BackendError::internal(CONTEXT, e))?;
    if !valid {
        return Err(BackendError::InvalidCredentials);
    }

    let token = state
        .tokens
        .issue(user.id)
        .map_err(|e| BackendError::internal(CONTEXT, e))?;

    tracing::info!("User logged in successfully: {} ({})", user.id, user.email);

    Ok(Json(TokenResponse { token }))
}
