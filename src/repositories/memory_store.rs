//! In-memory product store.
//!
//! Implements [`ProductStore`] over a plain `Vec`, with the same per-request
//! change-set semantics as the Diesel store. Used by the endpoint tests and
//! handy for running the API without a database.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{NewProduct, Product};
use crate::repositories::{ProductStore, StagedProducts};

#[derive(Debug, Default)]
struct Inner {
    rows: Vec<Product>,
    next_id: i32,
}

/// Product store keeping committed rows in memory.
///
/// Ids are assigned monotonically on commit and never reused. Pending writes
/// live in the caller's [`StagedProducts`] change set, never in the store.
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    inner: Mutex<Inner>,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with committed rows, assigning ids from 1.
    pub fn seeded(seed: Vec<NewProduct>) -> Self {
        let store = Self::new();
        {
            let mut inner = store.lock();
            for product in seed {
                let row = Self::assign_id(&mut inner, product);
                inner.rows.push(row);
            }
        }
        store
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn assign_id(inner: &mut Inner, product: NewProduct) -> Product {
        inner.next_id += 1;
        Product {
            id: inner.next_id,
            name: product.name,
            colour: product.colour,
            price: product.price,
        }
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn find_by_id(&self, product_id: i32) -> AppResult<Option<Product>> {
        let inner = self.lock();
        Ok(inner.rows.iter().find(|p| p.id == product_id).cloned())
    }

    async fn list_all(&self) -> AppResult<Vec<Product>> {
        Ok(self.lock().rows.clone())
    }

    async fn list_by_colour(&self, colour: &str) -> AppResult<Vec<Product>> {
        let wanted = colour.to_lowercase();
        let inner = self.lock();
        Ok(inner
            .rows
            .iter()
            .filter(|p| p.colour.to_lowercase() == wanted)
            .cloned()
            .collect())
    }

    async fn commit(&self, changes: StagedProducts) -> AppResult<Vec<Product>> {
        let staged = changes.into_pending();
        let mut inner = self.lock();
        let mut written = Vec::with_capacity(staged.len());
        for product in staged {
            let row = Self::assign_id(&mut inner, product);
            inner.rows.push(row.clone());
            written.push(row);
        }
        Ok(written)
    }
}
