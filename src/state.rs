//! Application state for the Axum web framework.
//!
//! Contains shared services and resources that are accessible
//! across all request handlers.

use std::sync::Arc;

use crate::config::JwtConfig;
use crate::db::AsyncDbPool;
use crate::repositories::{DieselProductStore, ProductStore};
use crate::services::Services;

/// Application state containing all shared services and resources.
///
/// Designed to be used with Axum's State extractor. Cloning is cheap since
/// the store is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// JWT configuration for token validation
    pub jwt_config: JwtConfig,
}

impl AppState {
    /// Creates a new AppState backed by the Diesel product store.
    pub fn new(pool: AsyncDbPool, jwt_config: JwtConfig) -> Self {
        Self::with_store(Arc::new(DieselProductStore::new(pool)), jwt_config)
    }

    /// Creates a new AppState over an arbitrary store implementation.
    ///
    /// Used by tests and in-memory deployments.
    pub fn with_store(store: Arc<dyn ProductStore>, jwt_config: JwtConfig) -> Self {
        Self {
            services: Services::new(store),
            jwt_config,
        }
    }
}
