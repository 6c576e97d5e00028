//! In-memory order store for handler tests
//!
//! Evaluates the same [`WhereClause`] the Postgres repo renders, with the
//! same ordering rules, so HTTP tests exercise real filter semantics.

use std::cmp::Ordering;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

use async_trait::async_trait;
use chrono::NaiveDate;

use super::store::{DbError, OrderStore};
use crate::models::{FilterOptions, OrderColumn, OrderFilter, OrderRecord, PageWindow, Paginated};
use crate::query::{Comparison, FilterColumn, Predicate, WhereClause};

#[derive(Default)]
pub struct MemoryOrderStore {
    rows: Vec<OrderRecord>,
    offline: AtomicBool,
}

impl MemoryOrderStore {
    pub fn new(rows: Vec<OrderRecord>) -> Self {
        Self {
            rows,
            offline: AtomicBool::new(false),
        }
    }

    /// Make every call fail as if the database were unreachable.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, AtomicOrdering::SeqCst);
    }

    fn check_online(&self) -> Result<(), DbError> {
        if self.offline.load(AtomicOrdering::SeqCst) {
            return Err(DbError::Backend("connection refused".into()));
        }
        Ok(())
    }

    fn matching(&self, clause: &WhereClause) -> Result<Vec<OrderRecord>, DbError> {
        let mut out = Vec::new();
        for row in &self.rows {
            let mut keep = true;
            for (predicate, value) in clause.predicates().iter().zip(clause.values()) {
                if !matches(row, predicate, value)? {
                    keep = false;
                    break;
                }
            }
            if keep {
                out.push(row.clone());
            }
        }
        Ok(out)
    }

    fn distinct(&self, column: FilterColumn) -> Vec<String> {
        let mut values: Vec<String> = self
            .rows
            .iter()
            .filter_map(|row| text_field(row, column.column()).cloned())
            .collect();
        values.sort();
        values.dedup();
        values
    }
}

fn text_field(row: &OrderRecord, column: OrderColumn) -> Option<&String> {
    match column {
        OrderColumn::Status => row.status.as_ref(),
        OrderColumn::BusinessUnit => row.business_unit.as_ref(),
        OrderColumn::ShipToState => row.state.as_ref(),
        OrderColumn::Carrier => row.carrier.as_ref(),
        _ => None,
    }
}

fn matches(row: &OrderRecord, predicate: &Predicate, value: &str) -> Result<bool, DbError> {
    let ordering = match predicate.column {
        OrderColumn::ShipDate => {
            let bound = NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
                DbError::Backend(format!("invalid input syntax for type date: \"{}\"", value))
            })?;
            row.ship_date.map(|d| d.cmp(&bound))
        }
        column => text_field(row, column).map(|v| v.as_str().cmp(value)),
    };

    // NULL never satisfies a comparison
    Ok(match (ordering, predicate.op) {
        (None, _) => false,
        (Some(o), Comparison::Eq) => o == Ordering::Equal,
        (Some(o), Comparison::Gte) => o != Ordering::Less,
        (Some(o), Comparison::Lte) => o != Ordering::Greater,
    })
}

/// ship_date DESC NULLS LAST, order_no ASC
fn row_order(a: &OrderRecord, b: &OrderRecord) -> Ordering {
    let by_date = match (a.ship_date, b.ship_date) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_date.then_with(|| a.order_number.cmp(&b.order_number))
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn ping(&self) -> Result<(), DbError> {
        self.check_online()
    }

    async fn list_orders(
        &self,
        filter: &OrderFilter,
        window: PageWindow,
    ) -> Result<Paginated<OrderRecord>, DbError> {
        self.check_online()?;
        let clause = WhereClause::from_filter(filter);
        let mut rows = self.matching(&clause)?;
        rows.sort_by(row_order);

        let total = rows.len() as i64;
        let data = rows
            .into_iter()
            .skip(window.offset() as usize)
            .take(window.limit() as usize)
            .collect();

        Ok(Paginated::new(data, total, window))
    }

    async fn filter_options(&self) -> Result<FilterOptions, DbError> {
        self.check_online()?;
        Ok(FilterOptions {
            statuses: self.distinct(FilterColumn::Status),
            business_units: self.distinct(FilterColumn::BusinessUnit),
            carriers: self.distinct(FilterColumn::Carrier),
        })
    }
}
