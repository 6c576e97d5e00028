//! HTTP server layer
//!
//! Axum server with:
//! - Origin allow-list (prefix match, no Origin passes)
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod error;
pub mod origin;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use origin::{AllowedOrigins, DEFAULT_ALLOWED_ORIGINS};
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
