/**
 * Registration Handler
 *
 * This module implements the user registration handler for POST /register.
 *
 * # Registration Process
 *
 * 1. Hash the password using bcrypt
 * 2. Create the user record
 * 3. Respond 201 with a confirmation text
 *
 * No password strength or email format validation is performed. A duplicate
 * email is reported separately from any other creation failure.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use bcrypt::hash;

use crate::backend::auth::handlers::types::RegisterRequest;
use crate::backend::error::{BackendError, StoreError};
use crate::backend::server::state::AppState;

/// Confirmation text returned on success
pub const REGISTERED: &str = "registration successful";

/// Registration handler
///
/// # Errors
///
/// * `400 duplicate_email` - If a user with this email already exists
/// * `400 registration_failed` - If the body is malformed, or hashing or user creation fails
///
/// # Example Request
///
/// ```http
/// POST /register HTTP/1.1
/// Content-Type: application/json
///
/// { "email": "a@x.com", "password": "p1" }
/// ```
pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, &'static str), BackendError> {
    let Json(request) = body.map_err(|e| BackendError::registration_failed(e.body_text()))?;
    tracing::info!("Registration request for email: {}", request.email);

    let password_hash =
        hash(&request.password, state.bcrypt_cost).map_err(BackendError::registration_failed)?;

    let user = state
        .users
        .create(&request.email, &password_hash)
        .await
        .map_err(|e| match e {
            StoreError::Duplicate { .. } => BackendError::DuplicateEmail,
            other => BackendError::registration_failed(other),
        })?;

    tracing::info!("User created successfully: {} ({})", user.id, user.email);

    Ok((StatusCode::CREATED, REGISTERED))
}
