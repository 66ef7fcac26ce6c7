//! Server state and wire types.

use std::sync::Arc;
use std::time::Instant;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error_handling::{ResolveError, ResolverStats};
use crate::resolve::{HopTransport, RedirectResolver, ResolverSettings};

/// Resolver behind the HTTP handlers; the transport is type-erased so tests
/// can plug in a fake.
pub type SharedResolver = RedirectResolver<Arc<dyn HopTransport>>;

/// Shared state for the HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Resolver shared by all requests
    pub resolver: Arc<SharedResolver>,
    /// Outcome counters for `/metrics`
    pub stats: Arc<ResolverStats>,
    /// Server start time
    pub start_time: Arc<Instant>,
}

impl AppState {
    /// Builds state around a resolver with the given settings and transport.
    pub fn new(settings: ResolverSettings, transport: Arc<dyn HopTransport>) -> Self {
        Self {
            resolver: Arc::new(RedirectResolver::new(settings, transport)),
            stats: Arc::new(ResolverStats::new()),
            start_time: Arc::new(Instant::now()),
        }
    }
}

/// Query string of `GET /resolve`
#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    /// URL to unmask
    pub url: Option<String>,
}

/// Success body of `GET /resolve`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveResponse {
    /// URL of the first non-redirect response
    pub final_url: String,
}

/// Error body for every rejected request
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Short machine-readable reason
    pub error: &'static str,
}

/// JSON response for `/health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the server is accepting requests
    pub status: &'static str,
}

impl IntoResponse for ResolveError {
    fn into_response(self) -> Response {
        // Every resolution failure is the caller's input or the remote chain, never a 5xx
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: self.reason(),
            }),
        )
            .into_response()
    }
}
