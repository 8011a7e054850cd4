/**
 * Session Management and JWT Tokens
 *
 * This module issues and verifies the signed bearer tokens that prove a
 * caller's user identity. Tokens embed the user id as `sub` and expire after
 * the configured TTL (one hour).
 */

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Token issuance or verification failure
#[derive(Debug, Error)]
pub enum TokenError {
    #[error(transparent)]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("invalid user id in token: {0}")]
    InvalidSubject(#[from] uuid::Error),
}

/// Signs and verifies bearer tokens with a process-wide secret
///
/// Built once from `AppConfig` and shared through `AppState`.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Create a token for a user, valid from now for the configured TTL
    pub fn issue(&self, user_id: Uuid) -> Result<String, TokenError> {
        let now = Utc::now().timestamp().max(0) as u64;
        let claims = Claims {
            sub: user_id.to_string(),
            exp: now + self.ttl.as_secs(),
            iat: now,
        };
        self.encode(&claims)
    }

    /// Sign arbitrary claims
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        Ok(encode(&Header::default(), claims, &self.encoding_key)?)
    }

    /// Verify and decode a token
    ///
    /// Fails on a bad signature, a malformed token, or an `exp` in the past.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::default();
        validation.leeway = 0;
        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)?;
        Ok(token_data.claims)
    }

    /// Verify a token and extract the user ID it was issued for
    pub fn user_id(&self, token: &str) -> Result<Uuid, TokenError> {
        let claims = self.verify(token)?;
        Ok(Uuid::parse_str(&claims.sub)?)
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
