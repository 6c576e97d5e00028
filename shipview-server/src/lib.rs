//! shipview-server: read-only HTTP gateway over shipment orders
//!
//! Translates dashboard query parameters into parameterized SQL against a
//! single Postgres table and returns JSON. Three routes: `/health`,
//! `/api/orders` and `/api/filters`.

pub mod db;
pub mod http;
pub mod models;
pub mod query;

pub use db::{create_pool, DatabaseConfig, DbError, OrderRepo, OrderStore};
pub use http::{run_server, AllowedOrigins, ServerConfig};
