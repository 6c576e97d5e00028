//! Order listing endpoint

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::{routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{OrderRecord, OrdersParams, Paginated};

/// GET /api/orders - filtered, windowed orders plus the matching total
///
/// Rows come newest ship date first. Orders without a ship date sort after
/// every dated order; ties fall back to order number.
///
/// The query string is taken as raw pairs so that a repeated key (first
/// one wins) still gets a JSON answer.
async fn list_orders(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Paginated<OrderRecord>>, ApiError> {
    let params = OrdersParams::from_pairs(pairs);
    let filter = params.filter();
    let window = params.window();
    tracing::debug!(
        ?filter,
        limit = window.limit(),
        offset = window.offset(),
        "listing orders"
    );

    let page = state
        .store
        .list_orders(&filter, window)
        .await
        .map_err(ApiError::OrdersQuery)?;
    Ok(Json(page))
}

/// Order routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/orders", get(list_orders))
}
