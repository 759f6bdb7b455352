//! Router configuration for the API.
//!
//! This module provides centralized route registration and middleware
//! configuration for the application.

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{auth_middleware, logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Routes
/// - `/api/products` - Product CRUD operations (bearer token required)
/// - `/api/healthcheck/ok` - Liveness check (unauthenticated)
/// - `/swagger-ui` - Interactive API documentation
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs
/// first): request IDs are assigned before the logging middleware reads them,
/// and the auth gate only wraps the product routes.
pub fn create_router(state: AppState) -> Router {
    let product_routes = handlers::products::product_routes().layer(
        middleware::from_fn_with_state(state.clone(), auth_middleware),
    );

    let api_routes = Router::new()
        .nest("/products", product_routes)
        .merge(handlers::health::health_routes());

    Router::new()
        .nest("/api", api_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
