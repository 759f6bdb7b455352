//! Bearer token validation helpers.
//!
//! Token issuance belongs to the external identity provider; this module only
//! validates tokens presented to the API and, for tests, mints access tokens
//! signed with the same shared secret.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// JWT Claims structure containing user information and token metadata
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// User email
    pub email: String,
    /// Username
    pub username: String,
    /// Issued at (timestamp)
    pub iat: i64,
    /// Expiration time (timestamp)
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a user with the given validity in hours.
    pub fn new(user_id: i32, email: String, username: String, expiration_hours: i64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours);

        Self {
            sub: user_id.to_string(),
            email,
            username,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        }
    }
}

/// Generates an access token signed with the shared secret.
pub fn generate_access_token(
    user_id: i32,
    email: String,
    username: String,
    secret: &str,
    expiration_hours: i64,
) -> AppResult<String> {
    let claims = Claims::new(user_id, email, username, expiration_hours);

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal {
        source: anyhow::anyhow!("Failed to generate JWT token: {}", e),
    })
}

/// Validates an access token and returns its claims.
///
/// # Errors
/// Returns `AppError::Unauthorized` if the signature is invalid or the token
/// has expired.
pub fn validate_access_token(token: &str, secret: &str) -> AppResult<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::Unauthorized {
            message: "Token has expired".to_string(),
        },
        _ => AppError::Unauthorized {
            message: "Invalid token".to_string(),
        },
    })
}
