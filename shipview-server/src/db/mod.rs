//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - One bounded pool, created at startup and closed at shutdown
//! - Handlers reach the database only through [`OrderStore`]
//! - Request values are always bound, never formatted into SQL

pub mod pool;
pub mod repos;
pub mod store;

#[cfg(test)]
pub(crate) mod memory;

pub use pool::{create_pool, DatabaseConfig, DEFAULT_MAX_CONNECTIONS};
pub use repos::OrderRepo;
pub use store::{DbError, OrderStore};
