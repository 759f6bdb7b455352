//! Product service for business logic operations.
//!
//! Thin domain facade over the [`ProductStore`] trait. The service holds no
//! state of its own beyond the store handle; pending writes belong to the
//! caller's change set, so the service is safe to share across concurrent
//! requests.

use std::sync::Arc;

use crate::error::AppResult;
use crate::models::{NewProduct, Product};
use crate::repositories::{ProductStore, StagedProducts};

/// Product service for handling product-related business logic.
#[derive(Clone)]
pub struct ProductService {
    store: Arc<dyn ProductStore>,
}

impl ProductService {
    /// Creates a new ProductService over the given store.
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// Gets a product by its id, or `None` if no such row exists.
    pub async fn get_product(&self, id: i32) -> AppResult<Option<Product>> {
        self.store.find_by_id(id).await
    }

    /// Lists all products.
    pub async fn get_all_products(&self) -> AppResult<Vec<Product>> {
        self.store.list_all().await
    }

    /// Lists products whose colour matches case-insensitively.
    pub async fn get_products_by_colour(&self, colour: &str) -> AppResult<Vec<Product>> {
        self.store.list_by_colour(colour).await
    }

    /// Stages a product into the caller's change set. Nothing is persisted
    /// until the change set is passed to [`commit_changes`].
    ///
    /// [`commit_changes`]: ProductService::commit_changes
    pub fn add_product(&self, changes: &mut StagedProducts, product: NewProduct) {
        changes.stage_insert(product);
    }

    /// Flushes one change set to durable storage.
    ///
    /// Returns the rows that were written; an empty result means no rows were
    /// affected and the save must be treated as failed.
    pub async fn commit_changes(&self, changes: StagedProducts) -> AppResult<Vec<Product>> {
        self.store.commit(changes).await
    }
}
