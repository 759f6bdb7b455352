//! Products API
//!
//! A REST API for managing a product catalog, backed by PostgreSQL with
//! JWT-protected endpoints and OpenAPI documentation.

pub mod api;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod logger;
pub mod models;
pub mod repositories;
pub mod schema;
pub mod server;
pub mod services;
pub mod state;
pub mod utils;

pub use state::AppState;
