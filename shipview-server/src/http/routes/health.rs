//! Health check endpoint

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub db: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// GET /health - runs `SELECT 1` against the pool
async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                db: "connected",
                message: None,
            }),
        ),
        Err(e) => {
            tracing::error!(error = %e, "health check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthResponse {
                    status: "error",
                    db: "disconnected",
                    message: Some(e.to_string()),
                }),
            )
        }
    }
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::MemoryOrderStore;

    #[tokio::test]
    async fn health_returns_connected() {
        let state = Arc::new(AppState::new(Arc::new(MemoryOrderStore::default())));
        let (status, Json(body)) = health(State(state)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.status, "ok");
        assert_eq!(body.db, "connected");
        assert!(body.message.is_none());
    }

    #[tokio::test]
    async fn health_reports_disconnected() {
        let store = Arc::new(MemoryOrderStore::default());
        store.set_offline(true);
        let state = Arc::new(AppState::new(store));

        let (status, Json(body)) = health(State(state)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.status, "error");
        assert_eq!(body.db, "disconnected");
        assert_eq!(body.message.as_deref(), Some("connection refused"));
    }
}
