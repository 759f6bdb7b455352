use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{NewProduct, Product};

/// Staged inserts for one unit of work.
///
/// Each request builds its own change set, so concurrent writers never see
/// each other's pending rows. Nothing is persisted until the change set is
/// handed to [`ProductStore::commit`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StagedProducts {
    pending: Vec<NewProduct>,
}

impl StagedProducts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a product for insertion; no id is assigned until commit.
    pub fn stage_insert(&mut self, product: NewProduct) {
        self.pending.push(product);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Consumes the change set, yielding the staged rows in insertion order.
    pub fn into_pending(self) -> Vec<NewProduct> {
        self.pending
    }
}

/// Durable CRUD access to the products table.
///
/// Writes follow a two-phase unit-of-work pattern:
/// [`StagedProducts::stage_insert`] buffers a pending record without assigning
/// an id, and [`commit`] flushes one change set to durable storage in a single
/// atomic write. A change set belongs to exactly one request; the store keeps
/// no pending state of its own.
///
/// `commit` returns the rows that were written, ids assigned. An empty result
/// means no rows were affected; it does not distinguish "nothing staged" from
/// "write failed", and callers must treat it as a failed save.
///
/// [`commit`]: ProductStore::commit
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Point lookup by primary key. Absence is not an error.
    async fn find_by_id(&self, product_id: i32) -> AppResult<Option<Product>>;

    /// Full table scan, store-defined order.
    async fn list_all(&self) -> AppResult<Vec<Product>>;

    /// Case-insensitive exact match on colour. An empty input matches
    /// products whose colour is also empty.
    async fn list_by_colour(&self, colour: &str) -> AppResult<Vec<Product>>;

    /// Flushes one change set to durable storage and returns the written rows.
    async fn commit(&self, changes: StagedProducts) -> AppResult<Vec<Product>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    #[test]
    fn change_sets_are_independent() {
        let product = NewProduct {
            name: "Product 1".to_string(),
            colour: "Red".to_string(),
            price: BigDecimal::from_str("10.00").unwrap(),
        };

        let mut first = StagedProducts::new();
        let second = StagedProducts::new();
        first.stage_insert(product.clone());

        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
        assert_eq!(first.into_pending(), vec![product]);
    }
}
