//! Bearer token authentication middleware.
//!
//! The API only acts as a pass/fail gate: token issuance and identity
//! management are owned by an external provider, this middleware merely
//! validates the presented token against the shared secret.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::jwt::{Claims, validate_access_token};

/// Extension type for authenticated caller information.
///
/// Added to request extensions after successful authentication and
/// extractable in handlers with `Extension<AuthUser>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    /// User ID from JWT claims
    pub user_id: i32,
    /// User email from JWT claims
    pub email: String,
    /// Username from JWT claims
    pub username: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub.parse().unwrap_or(0),
            email: claims.email,
            username: claims.username,
        }
    }
}

/// Validates the bearer token from the Authorization header and adds the
/// authenticated caller to request extensions.
///
/// # Errors
/// Returns 401 Unauthorized if the header is missing, not in
/// `Bearer <token>` form, or the token fails validation.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized {
            message: "Missing authorization header".to_string(),
        })?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized {
            message: "Invalid authorization header format. Expected: Bearer <token>".to_string(),
        })?;

    let claims = validate_access_token(token, &state.jwt_config.secret)?;

    let auth_user = AuthUser::from(claims);
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}
