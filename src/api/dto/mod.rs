//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `product` - Product-related request/response DTOs
//! - `health` - Health check DTOs
//! - `error` - Common error response DTOs

mod error;
mod health;
mod product;

pub use error::ErrorResponse;
pub use health::{HealthCheckResponse, HealthStatus};
pub use product::{AddProductRequest, ProductResponse};
