//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between
//! the store abstraction and the HTTP handlers.

mod product_service;

pub use product_service::ProductService;

use std::sync::Arc;

use crate::repositories::ProductStore;

/// Aggregates all services for convenient access.
///
/// This struct is designed to be used as Axum application state.
/// Cloning is cheap since the underlying store is behind an `Arc`.
#[derive(Clone)]
pub struct Services {
    pub products: ProductService,
}

impl Services {
    /// Creates a new Services instance over the given product store.
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self {
            products: ProductService::new(store),
        }
    }
}
