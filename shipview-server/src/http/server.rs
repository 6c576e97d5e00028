//! Axum server setup
//!
//! Server skeleton with:
//! - Origin allow-list enforced ahead of every route
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C, then the pool is closed

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{middleware, Router};
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::origin::{guard_origin, AllowedOrigins};
use super::routes;
use crate::db::{OrderRepo, OrderStore};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:3001)
    pub bind_addr: SocketAddr,

    /// Origins allowed to call the API from a browser
    pub allowed_origins: AllowedOrigins,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3001)),
            allowed_origins: AllowedOrigins::default(),
        }
    }
}

/// Shared application state
pub struct AppState {
    pub store: Arc<dyn OrderStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }
}

/// Build the application router.
///
/// Layer order, outermost first: tracing, origin guard, CORS, routes.
pub fn build_router(state: Arc<AppState>, origins: AllowedOrigins) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::orders::router())
        .merge(routes::filters::router())
        .with_state(state)
        .layer(origins.cors_layer())
        .layer(middleware::from_fn_with_state(origins, guard_origin))
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server.
///
/// Takes ownership of the pool and closes it once shutdown completes.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DatabaseConfig::default()).await?;
/// run_server(pool, ServerConfig::default()).await?;
/// ```
pub async fn run_server(pool: PgPool, config: ServerConfig) -> Result<(), ServerError> {
    tracing::info!(
        origins = ?config.allowed_origins.as_slice(),
        "origin allow-list loaded"
    );
    let state = Arc::new(AppState::new(Arc::new(OrderRepo::new(pool.clone()))));
    let app = build_router(state, config.allowed_origins);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    pool.close().await;
    tracing::info!("Server shutdown complete");
    served.map_err(ServerError::from)
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
