//! Diesel-backed product store for async database operations.
//!
//! Implements [`ProductStore`] against PostgreSQL using diesel_async. Each
//! request's staged inserts arrive as one change set and are flushed in a
//! single `INSERT .. RETURNING` statement on commit.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sql_types::Text;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppResult;
use crate::models::Product;
use crate::repositories::{ProductStore, StagedProducts};

diesel::define_sql_function! {
    fn lower(x: Text) -> Text;
}

/// Product store over an async connection pool.
///
/// The store itself is stateless; pending writes live in the per-request
/// [`StagedProducts`] change set. Since `AsyncDbPool` (bb8::Pool) internally
/// uses `Arc`, the pool handle is cheap to share.
pub struct DieselProductStore {
    pool: AsyncDbPool,
}

impl DieselProductStore {
    /// Creates a new store with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for DieselProductStore {
    async fn find_by_id(&self, product_id: i32) -> AppResult<Option<Product>> {
        use crate::schema::products::dsl::*;
        let mut conn = self.pool.get().await?;

        products
            .filter(id.eq(product_id))
            .select(Product::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(Into::into)
    }

    async fn list_all(&self) -> AppResult<Vec<Product>> {
        use crate::schema::products::dsl::*;
        let mut conn = self.pool.get().await?;

        products
            .select(Product::as_select())
            .load(&mut conn)
            .await
            .map_err(Into::into)
    }

    async fn list_by_colour(&self, wanted: &str) -> AppResult<Vec<Product>> {
        use crate::schema::products::dsl::*;
        let mut conn = self.pool.get().await?;

        products
            .filter(lower(colour).eq(wanted.to_lowercase()))
            .select(Product::as_select())
            .load(&mut conn)
            .await
            .map_err(Into::into)
    }

    async fn commit(&self, changes: StagedProducts) -> AppResult<Vec<Product>> {
        use crate::schema::products::dsl::*;

        let staged = changes.into_pending();
        if staged.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.pool.get().await?;

        diesel::insert_into(products)
            .values(&staged)
            .returning(Product::as_returning())
            .get_results(&mut conn)
            .await
            .map_err(Into::into)
    }
}
