//! Health check DTOs for API responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response structure.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthCheckResponse {
    /// Overall health status
    #[schema(example = "Healthy")]
    pub status: HealthStatus,
    /// Application version
    #[schema(example = "0.1.0")]
    pub version: String,
    /// Timestamp of the health check (ISO 8601 format)
    #[schema(value_type = String, format = DateTime, example = "2024-01-01T12:00:00.000Z")]
    pub timestamp: String,
}

/// Health status enumeration.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub enum HealthStatus {
    /// The API is up and serving requests
    Healthy,
    /// The API is up but a dependency is failing
    Unhealthy,
}
