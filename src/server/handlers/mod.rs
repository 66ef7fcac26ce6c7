//! HTTP handlers.

mod metrics;
mod resolve;

use axum::Json;

use super::types::HealthResponse;

pub use metrics::metrics_handler;
pub use resolve::resolve_handler;

/// Liveness probe
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
