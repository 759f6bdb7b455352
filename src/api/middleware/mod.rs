//! Middleware components for request processing.
//!
//! This module contains middleware for logging, request ID tracking,
//! error-to-response conversion, and authentication.
//!
//! Error-to-response conversion lives in `error_handler` as an
//! `IntoResponse` impl and needs no re-export.

mod auth;
mod error_handler;
mod logging;
mod request_id;

pub use auth::{AuthUser, auth_middleware};
pub use logging::logging_middleware;
pub use request_id::{RequestId, request_id_middleware};
