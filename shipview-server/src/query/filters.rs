//! DISTINCT-value statements for the filter dropdowns

use crate::models::{OrderColumn, ORDERS_TABLE};

/// Columns the dashboard offers as dropdowns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterColumn {
    Status,
    BusinessUnit,
    Carrier,
}

impl FilterColumn {
    pub const ALL: [FilterColumn; 3] = [Self::Status, Self::BusinessUnit, Self::Carrier];

    pub fn column(&self) -> OrderColumn {
        match self {
            Self::Status => OrderColumn::Status,
            Self::BusinessUnit => OrderColumn::BusinessUnit,
            Self::Carrier => OrderColumn::Carrier,
        }
    }
}

/// Distinct non-null values of a column, ascending.
pub fn distinct_values_sql(column: FilterColumn) -> String {
    let name = column.column().name();
    format!(
        "SELECT DISTINCT {name}::text AS value FROM {ORDERS_TABLE} \
         WHERE {name} IS NOT NULL ORDER BY value ASC"
    )
}
