//! Order record and the fixed export mapping
//!
//! The `shipment_orders` table is owned elsewhere. This module only knows
//! which columns exist, how each one is projected in SQL, and what the
//! public JSON field is called.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// Table the gateway reads from
pub const ORDERS_TABLE: &str = "shipment_orders";

/// SQL type a column is cast to when projected or compared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    Text,
    Date,
    BigInt,
}

impl SqlType {
    /// Cast suffix appended to a column or placeholder.
    pub fn cast(&self) -> &'static str {
        match self {
            Self::Text => "::text",
            Self::Date => "::date",
            Self::BigInt => "::bigint",
        }
    }
}

/// Columns of the orders table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderColumn {
    OrderNo,
    CustomerName,
    ShipToCity,
    ShipToState,
    ShipToZip,
    ShipToCountry,
    ShipDate,
    DueDate,
    CorrectedDueDate,
    Status,
    Carrier,
    OrderQty,
    BusinessUnit,
    SubStatus,
}

impl OrderColumn {
    /// Every column, in export order.
    pub const ALL: [OrderColumn; 14] = [
        Self::OrderNo,
        Self::CustomerName,
        Self::ShipToCity,
        Self::ShipToState,
        Self::ShipToZip,
        Self::ShipToCountry,
        Self::ShipDate,
        Self::DueDate,
        Self::CorrectedDueDate,
        Self::Status,
        Self::Carrier,
        Self::OrderQty,
        Self::BusinessUnit,
        Self::SubStatus,
    ];

    /// Column name in the database.
    pub fn name(&self) -> &'static str {
        match self {
            Self::OrderNo => "order_no",
            Self::CustomerName => "customer_name",
            Self::ShipToCity => "ship_to_city",
            Self::ShipToState => "ship_to_state",
            Self::ShipToZip => "ship_to_zip",
            Self::ShipToCountry => "ship_to_country",
            Self::ShipDate => "ship_date",
            Self::DueDate => "due_date",
            Self::CorrectedDueDate => "corrected_due_date",
            Self::Status => "status",
            Self::Carrier => "carrier",
            Self::OrderQty => "order_qty",
            Self::BusinessUnit => "business_unit",
            Self::SubStatus => "sub_status",
        }
    }

    /// Field name in API responses.
    pub fn field(&self) -> &'static str {
        match self {
            Self::OrderNo => "order_number",
            Self::CustomerName => "customer",
            Self::ShipToCity => "city",
            Self::ShipToState => "state",
            Self::ShipToZip => "zip",
            Self::ShipToCountry => "country",
            Self::ShipDate => "ship_date",
            Self::DueDate => "due_date",
            Self::CorrectedDueDate => "corrected_due_date",
            Self::Status => "status",
            Self::Carrier => "carrier",
            Self::OrderQty => "quantity",
            Self::BusinessUnit => "business_unit",
            Self::SubStatus => "sub_status",
        }
    }

    pub fn sql_type(&self) -> SqlType {
        match self {
            Self::ShipDate | Self::DueDate | Self::CorrectedDueDate => SqlType::Date,
            Self::OrderQty => SqlType::BigInt,
            _ => SqlType::Text,
        }
    }

    /// Projection expression, e.g. `order_no::text AS order_number`.
    pub fn projection(&self) -> String {
        format!(
            "{}{} AS {}",
            self.name(),
            self.sql_type().cast(),
            self.field()
        )
    }
}

/// Comma-separated projection of every exported column.
pub fn export_projection() -> String {
    OrderColumn::ALL
        .iter()
        .map(OrderColumn::projection)
        .collect::<Vec<_>>()
        .join(", ")
}

/// One shipment order, renamed for the API
#[derive(Debug, Clone, Default, PartialEq, Serialize, FromRow)]
pub struct OrderRecord {
    pub order_number: Option<String>,
    pub customer: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
    pub ship_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub corrected_due_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub carrier: Option<String>,
    pub quantity: Option<i64>,
    pub business_unit: Option<String>,
    pub sub_status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_casts_and_renames() {
        assert_eq!(
            OrderColumn::OrderNo.projection(),
            "order_no::text AS order_number"
        );
        assert_eq!(
            OrderColumn::ShipDate.projection(),
            "ship_date::date AS ship_date"
        );
        assert_eq!(
            OrderColumn::OrderQty.projection(),
            "order_qty::bigint AS quantity"
        );
    }

    #[test]
    fn export_projection_covers_every_column() {
        let projection = export_projection();
        for column in OrderColumn::ALL {
            assert!(projection.contains(&format!(" AS {}", column.field())));
        }
        assert!(projection.starts_with("order_no::text AS order_number, "));
        assert!(projection.ends_with("sub_status::text AS sub_status"));
    }

    #[test]
    fn serializes_public_field_names() {
        let record = OrderRecord {
            order_number: Some("SO-1".into()),
            ship_date: NaiveDate::from_ymd_opt(2024, 3, 9),
            quantity: Some(12),
            ..Default::default()
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["order_number"], "SO-1");
        assert_eq!(json["ship_date"], "2024-03-09");
        assert_eq!(json["quantity"], 12);
        assert!(json["customer"].is_null());
        assert_eq!(json.as_object().unwrap().len(), OrderColumn::ALL.len());
    }
}
