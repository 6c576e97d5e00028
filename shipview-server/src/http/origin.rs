//! Origin allow-list
//!
//! A request passes when it has no `Origin` header or when the header
//! starts with an allowed origin. Anything else is turned away before the
//! router sees it.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::request::Parts;
use axum::http::{header, HeaderValue, Method};
use axum::middleware::Next;
use axum::response::Response;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use super::error::ApiError;

/// Origins the dashboard is served from
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = [
    "https://shipview.pages.dev",
    "http://localhost:5173",
    "http://localhost:3000",
];

/// Prefix-matched origin allow-list
#[derive(Debug, Clone)]
pub struct AllowedOrigins(Arc<[String]>);

impl AllowedOrigins {
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(origins.into_iter().map(Into::into).collect())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Whether a present `Origin` value is allowed.
    pub fn permits(&self, origin: &str) -> bool {
        self.0.iter().any(|allowed| origin.starts_with(allowed.as_str()))
    }

    fn permits_header(&self, origin: &HeaderValue) -> bool {
        origin.to_str().map(|o| self.permits(o)).unwrap_or(false)
    }

    /// CORS headers for permitted cross-origin callers.
    pub fn cors_layer(&self) -> CorsLayer {
        let origins = self.clone();
        CorsLayer::new()
            .allow_origin(AllowOrigin::predicate(move |origin: &HeaderValue, _: &Parts| {
                origins.permits_header(origin)
            }))
            .allow_methods([Method::GET, Method::OPTIONS])
            .allow_headers(Any)
    }
}

impl Default for AllowedOrigins {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_ORIGINS)
    }
}

/// Middleware rejecting requests from origins off the list.
pub async fn guard_origin(
    State(origins): State<AllowedOrigins>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if let Some(origin) = request.headers().get(header::ORIGIN) {
        if !origins.permits_header(origin) {
            return Err(ApiError::OriginRejected {
                origin: String::from_utf8_lossy(origin.as_bytes()).into_owned(),
            });
        }
    }

    Ok(next.run(request).await)
}
