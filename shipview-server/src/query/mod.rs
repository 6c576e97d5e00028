//! Filter-to-SQL translation
//!
//! Filters become a list of predicates and a strictly parallel list of
//! bound values. Predicate `i` always renders placeholder `$i+1` and is
//! satisfied by `values[i]`. Request values never appear in SQL text.

pub mod filters;
pub mod orders;

use crate::models::{OrderColumn, OrderFilter, SqlType};

pub use filters::{distinct_values_sql, FilterColumn};
pub use orders::OrderQuery;

/// Comparison operator of a predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    Gte,
    Lte,
}

impl Comparison {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Gte => ">=",
            Self::Lte => "<=",
        }
    }
}

/// One `column op $n` condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Predicate {
    pub column: OrderColumn,
    pub op: Comparison,
}

impl Predicate {
    pub fn new(column: OrderColumn, op: Comparison) -> Self {
        Self { column, op }
    }

    /// Render with the given 1-based placeholder number.
    ///
    /// Non-text columns cast the bound text on the SQL side, so a value
    /// the database cannot parse fails the query instead of matching.
    pub fn to_sql(&self, placeholder: usize) -> String {
        let cast = match self.column.sql_type() {
            SqlType::Text => "",
            other => other.cast(),
        };
        format!(
            "{} {} ${}{}",
            self.column.name(),
            self.op.as_sql(),
            placeholder,
            cast
        )
    }
}

/// Parameterized WHERE clause
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhereClause {
    predicates: Vec<Predicate>,
    values: Vec<String>,
}

impl WhereClause {
    /// Translate a filter into predicates.
    ///
    /// Order is fixed: status, business_unit, from_date, to_date, state.
    pub fn from_filter(filter: &OrderFilter) -> Self {
        let mut clause = Self::default();
        let candidates = [
            (&filter.status, OrderColumn::Status, Comparison::Eq),
            (&filter.business_unit, OrderColumn::BusinessUnit, Comparison::Eq),
            (&filter.from_date, OrderColumn::ShipDate, Comparison::Gte),
            (&filter.to_date, OrderColumn::ShipDate, Comparison::Lte),
            (&filter.state, OrderColumn::ShipToState, Comparison::Eq),
        ];

        for (value, column, op) in candidates {
            if let Some(value) = value {
                clause.push(Predicate::new(column, op), value.clone());
            }
        }

        clause
    }

    fn push(&mut self, predicate: Predicate, value: String) {
        self.predicates.push(predicate);
        self.values.push(value);
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Bound values, in placeholder order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Number of placeholders the clause uses.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// `WHERE a = $1 AND b >= $2::date`, or an empty string when there
    /// are no predicates.
    pub fn to_sql(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let conditions = self
            .predicates
            .iter()
            .enumerate()
            .map(|(i, p)| p.to_sql(i + 1))
            .collect::<Vec<_>>()
            .join(" AND ");

        format!("WHERE {}", conditions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_filter() -> OrderFilter {
        OrderFilter {
            status: Some("Shipped".into()),
            business_unit: Some("West".into()),
            from_date: Some("2024-01-01".into()),
            to_date: Some("2024-12-31".into()),
            state: Some("CA".into()),
        }
    }

    #[test]
    fn empty_filter_has_no_where() {
        let clause = WhereClause::from_filter(&OrderFilter::default());
        assert!(clause.is_empty());
        assert_eq!(clause.to_sql(), "");
        assert!(clause.values().is_empty());
    }

    #[test]
    fn full_filter_in_fixed_order() {
        let clause = WhereClause::from_filter(&full_filter());
        assert_eq!(
            clause.to_sql(),
            "WHERE status = $1 AND business_unit = $2 AND ship_date >= $3::date \
             AND ship_date <= $4::date AND ship_to_state = $5"
        );
        assert_eq!(
            clause.values(),
            &["Shipped", "West", "2024-01-01", "2024-12-31", "CA"]
        );
    }

    #[test]
    fn partial_filter_numbers_contiguously() {
        let filter = OrderFilter {
            to_date: Some("2024-06-30".into()),
            state: Some("NY".into()),
            ..Default::default()
        };
        let clause = WhereClause::from_filter(&filter);
        assert_eq!(
            clause.to_sql(),
            "WHERE ship_date <= $1::date AND ship_to_state = $2"
        );
        assert_eq!(clause.values(), &["2024-06-30", "NY"]);
        assert_eq!(clause.len(), 2);
    }

    #[test]
    fn values_never_reach_sql_text() {
        let filter = OrderFilter {
            status: Some("x'; DROP TABLE shipment_orders; --".into()),
            ..Default::default()
        };
        let clause = WhereClause::from_filter(&filter);
        assert_eq!(clause.to_sql(), "WHERE status = $1");
        assert_eq!(clause.values()[0], "x'; DROP TABLE shipment_orders; --");
    }

    #[test]
    fn same_filter_same_clause() {
        let a = WhereClause::from_filter(&full_filter());
        let b = WhereClause::from_filter(&full_filter());
        assert_eq!(a, b);
    }
}
