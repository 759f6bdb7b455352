//! Error handler for converting AppError to HTTP responses.
//!
//! Implements the IntoResponse trait for AppError, providing consistent
//! error response formatting across the API with proper status code mapping
//! and error message sanitization for infrastructure failures.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

impl IntoResponse for AppError {
    /// Converts an AppError into an HTTP response.
    ///
    /// # Status Code Mapping
    /// - NotFound → 404 NOT_FOUND
    /// - ValidationErrors → 400 BAD_REQUEST
    /// - BadRequest → 400 BAD_REQUEST
    /// - Unauthorized → 401 UNAUTHORIZED
    /// - Database → 500 INTERNAL_SERVER_ERROR
    /// - Configuration → 500 INTERNAL_SERVER_ERROR
    /// - ConnectionPool → 503 SERVICE_UNAVAILABLE
    /// - Internal → 500 INTERNAL_SERVER_ERROR
    fn into_response(self) -> Response {
        let status = error_to_status_code(&self);

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let error_response = match &self {
            AppError::NotFound {
                entity,
                field,
                value,
            } => ErrorResponse::new(
                "NOT_FOUND",
                &format!("{} with {}={} was not found", entity, field, value),
            ),
            AppError::ValidationErrors { errors } => {
                ErrorResponse::new("VALIDATION_ERROR", "Request validation failed")
                    .with_details(json!({ "errors": errors }))
            }
            AppError::BadRequest { message } => ErrorResponse::new("BAD_REQUEST", message),
            AppError::Unauthorized { message } => ErrorResponse::new("UNAUTHORIZED", message),
            AppError::Database { operation, .. } => ErrorResponse::new(
                "DATABASE_ERROR",
                &format!("Database operation failed: {}", operation),
            )
            .with_details(json!({ "operation": operation })),
            AppError::Configuration { key, .. } => {
                ErrorResponse::new("CONFIGURATION_ERROR", &format!("Configuration error: {}", key))
                    .with_details(json!({ "key": key }))
            }
            AppError::ConnectionPool { .. } => {
                ErrorResponse::new("SERVICE_UNAVAILABLE", "Database connection unavailable")
            }
            AppError::Internal { .. } => {
                ErrorResponse::new("INTERNAL_ERROR", "An internal error occurred")
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Maps an AppError variant to its corresponding HTTP status code.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::ValidationErrors { .. } => StatusCode::BAD_REQUEST,
        AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
        AppError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::Configuration { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::ConnectionPool { .. } => StatusCode::SERVICE_UNAVAILABLE,
        AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationFieldError;

    #[test]
    fn test_not_found_status_code() {
        let error = AppError::not_found("product", 123);
        assert_eq!(error_to_status_code(&error), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_errors_status_code() {
        let error = AppError::ValidationErrors {
            errors: vec![ValidationFieldError {
                field: "name".to_string(),
                message: "Name must not be empty".to_string(),
            }],
        };
        assert_eq!(error_to_status_code(&error), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_bad_request_status_code() {
        let error = AppError::BadRequest {
            message: "Could not save changes to Database".to_string(),
        };
        assert_eq!(error_to_status_code(&error), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unauthorized_status_code() {
        let error = AppError::Unauthorized {
            message: "Missing authorization header".to_string(),
        };
        assert_eq!(error_to_status_code(&error), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_database_status_code() {
        let error = AppError::Database {
            operation: "insert product".to_string(),
            source: anyhow::anyhow!("connection reset"),
        };
        assert_eq!(
            error_to_status_code(&error),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_connection_pool_status_code() {
        let error = AppError::ConnectionPool {
            source: anyhow::anyhow!("pool exhausted"),
        };
        assert_eq!(error_to_status_code(&error), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_internal_error_is_sanitized() {
        let error = AppError::Internal {
            source: anyhow::anyhow!("panic with sensitive data"),
        };
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
