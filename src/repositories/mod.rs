//! Persistence layer for product records.
//!
//! The service layer depends only on the [`ProductStore`] trait; one concrete
//! implementation exists per backing engine.

mod diesel_store;
mod memory_store;
mod product_store;

pub use diesel_store::DieselProductStore;
pub use memory_store::MemoryProductStore;
pub use product_store::{ProductStore, StagedProducts};

#[cfg(test)]
pub use product_store::MockProductStore;
