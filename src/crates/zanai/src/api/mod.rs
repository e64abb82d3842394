//! REST API layer
//!
//! Axum routes, handlers, DTOs, and the error/response conventions shared by
//! every endpoint.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod response;
pub mod routes;

pub use error::{ApiError, ApiResult};
pub use routes::{create_router, AppState};
