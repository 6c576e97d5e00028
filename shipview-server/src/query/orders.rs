//! Row-fetch and count statements for `GET /api/orders`

use crate::models::{export_projection, OrderFilter, PageWindow, ORDERS_TABLE};

use super::WhereClause;

/// A filtered, windowed orders query.
///
/// The row fetch and the count are rendered from the same [`WhereClause`],
/// so they always agree on which rows match.
#[derive(Debug, Clone)]
pub struct OrderQuery {
    clause: WhereClause,
    window: PageWindow,
}

impl OrderQuery {
    pub fn new(filter: &OrderFilter, window: PageWindow) -> Self {
        Self {
            clause: WhereClause::from_filter(filter),
            window,
        }
    }

    pub fn clause(&self) -> &WhereClause {
        &self.clause
    }

    pub fn window(&self) -> PageWindow {
        self.window
    }

    /// Predicate values, shared by both statements.
    pub fn values(&self) -> &[String] {
        self.clause.values()
    }

    /// Row fetch. Binds the predicate values, then limit, then offset.
    ///
    /// Undated orders sort last, unlike a bare `DESC` in Postgres.
    pub fn select_sql(&self) -> String {
        let limit_at = self.clause.len() + 1;
        let mut sql = format!("SELECT {} FROM {}", export_projection(), ORDERS_TABLE);
        push_where(&mut sql, &self.clause);
        sql.push_str(&format!(
            " ORDER BY ship_date DESC NULLS LAST, order_no ASC LIMIT ${} OFFSET ${}",
            limit_at,
            limit_at + 1
        ));
        sql
    }

    /// Count of all matching rows. Binds the predicate values only.
    pub fn count_sql(&self) -> String {
        let mut sql = format!("SELECT COUNT(*) FROM {}", ORDERS_TABLE);
        push_where(&mut sql, &self.clause);
        sql
    }
}

fn push_where(sql: &mut String, clause: &WhereClause) {
    if !clause.is_empty() {
        sql.push(' ');
        sql.push_str(&clause.to_sql());
    }
}
