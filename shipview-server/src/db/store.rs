//! Storage seam between the HTTP layer and the database
//!
//! Handlers only see [`OrderStore`]. Production uses the Postgres
//! implementation in [`super::repos`]; tests swap in an in-memory one.

use async_trait::async_trait;

use crate::models::{FilterOptions, OrderFilter, OrderRecord, PageWindow, Paginated};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("{0}")]
    Sqlx(#[from] sqlx::Error),

    /// Failure reported by a non-sqlx backend
    #[error("{0}")]
    Backend(String),
}

/// Read access to shipment orders
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Trivial round trip proving the database is reachable.
    async fn ping(&self) -> Result<(), DbError>;

    /// One window of matching orders plus the unwindowed total.
    async fn list_orders(
        &self,
        filter: &OrderFilter,
        window: PageWindow,
    ) -> Result<Paginated<OrderRecord>, DbError>;

    /// Distinct values for each dropdown column.
    async fn filter_options(&self) -> Result<FilterOptions, DbError>;
}
