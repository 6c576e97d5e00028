//! Filter dropdown endpoint

use std::sync::Arc;

use axum::extract::State;
use axum::{routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::FilterOptions;

/// GET /api/filters - distinct statuses, business units and carriers
async fn list_filters(State(state): State<Arc<AppState>>) -> Result<Json<FilterOptions>, ApiError> {
    let options = state
        .store
        .filter_options()
        .await
        .map_err(ApiError::FiltersLoad)?;
    Ok(Json(options))
}

/// Filter routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/filters", get(list_filters))
}
