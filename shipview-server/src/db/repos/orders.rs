//! Order repository
//!
//! Every request is at most two statements for orders (fetch + count) or
//! three for the dropdowns. No transactions: each statement is a single
//! read.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::store::{DbError, OrderStore};
use crate::models::{FilterOptions, OrderFilter, OrderRecord, PageWindow, Paginated};
use crate::query::{distinct_values_sql, FilterColumn, OrderQuery};

/// Postgres-backed order store
#[derive(Clone)]
pub struct OrderRepo {
    pool: PgPool,
}

impl OrderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn fetch_rows(&self, query: &OrderQuery) -> Result<Vec<OrderRecord>, DbError> {
        let sql = query.select_sql();
        let mut stmt = sqlx::query_as::<_, OrderRecord>(&sql);
        for value in query.values() {
            stmt = stmt.bind(value);
        }
        let rows = stmt
            .bind(query.window().limit())
            .bind(query.window().offset())
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn count_rows(&self, query: &OrderQuery) -> Result<i64, DbError> {
        let sql = query.count_sql();
        let mut stmt = sqlx::query_scalar::<_, i64>(&sql);
        for value in query.values() {
            stmt = stmt.bind(value);
        }
        Ok(stmt.fetch_one(&self.pool).await?)
    }

    async fn distinct_values(&self, column: FilterColumn) -> Result<Vec<String>, DbError> {
        let sql = distinct_values_sql(column);
        let values = sqlx::query_scalar::<_, String>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(values)
    }
}

#[async_trait]
impl OrderStore for OrderRepo {
    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn list_orders(
        &self,
        filter: &OrderFilter,
        window: PageWindow,
    ) -> Result<Paginated<OrderRecord>, DbError> {
        let query = OrderQuery::new(filter, window);
        let (rows, total) = tokio::try_join!(self.fetch_rows(&query), self.count_rows(&query))?;
        Ok(Paginated::new(rows, total, window))
    }

    async fn filter_options(&self) -> Result<FilterOptions, DbError> {
        let (statuses, business_units, carriers) = tokio::try_join!(
            self.distinct_values(FilterColumn::Status),
            self.distinct_values(FilterColumn::BusinessUnit),
            self.distinct_values(FilterColumn::Carrier),
        )?;

        Ok(FilterOptions {
            statuses,
            business_units,
            carriers,
        })
    }
}
