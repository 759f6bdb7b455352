//! Health check endpoint handlers.
//!
//! Provides an unauthenticated liveness endpoint for monitoring and load
//! balancer health checks.

use axum::{Json, Router, routing::get};

use crate::api::doc::HEALTH_TAG;
use crate::api::dto::{HealthCheckResponse, HealthStatus};
use crate::state::AppState;

/// Creates health check routes.
///
/// # Routes
/// - `GET /healthcheck/ok` - Liveness check, no authentication required
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/healthcheck/ok", get(health_check))
}

/// GET /api/healthcheck/ok - Liveness check
///
/// Returns the health status and the current timestamp. If we can respond,
/// we're alive; dependencies are not probed here.
#[utoipa::path(
    get,
    path = "/api/healthcheck/ok",
    responses(
        (status = 200, description = "Service is healthy", body = HealthCheckResponse)
    ),
    tag = HEALTH_TAG
)]
pub async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check_reports_healthy() {
        let Json(response) = health_check().await;
        assert_eq!(response.status, HealthStatus::Healthy);
        assert_eq!(response.version, env!("CARGO_PKG_VERSION"));
        assert!(!response.timestamp.is_empty());
    }
}
