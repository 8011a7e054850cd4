/**
 * Authentication Handler Types
 *
 * Request and response bodies for the registration and login handlers.
 */

use serde::{Deserialize, Serialize};

/// Registration request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RegisterRequest {
    /// User's email address (must be unique)
    pub email: String,
    /// User's password (stored as a bcrypt digest)
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response
///
/// Contains the signed bearer token (one-hour validity).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TokenResponse {
    pub token: String,
}
