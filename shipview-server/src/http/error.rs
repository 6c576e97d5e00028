//! API error types with IntoResponse
//!
//! Every failure becomes `{"error": ..., "message": ...}`. Database
//! failures carry the driver's message so the dashboard can show it.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Row fetch or count failed (500, logged)
    OrdersQuery(DbError),

    /// A dropdown query failed (500, logged)
    FiltersLoad(DbError),

    /// Origin header not on the allow-list (403)
    OriginRejected { origin: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::OrdersQuery(e) => {
                tracing::error!(error = %e, "orders query failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Failed to query orders",
                        "message": e.to_string()
                    }),
                )
            }
            Self::FiltersLoad(e) => {
                tracing::error!(error = %e, "filter options query failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Failed to load filters",
                        "message": e.to_string()
                    }),
                )
            }
            Self::OriginRejected { origin } => {
                tracing::warn!(origin = %origin, "rejected cross-origin request");
                (
                    StatusCode::FORBIDDEN,
                    json!({
                        "error": "Origin not allowed",
                        "message": format!("origin '{}' is not permitted", origin)
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
