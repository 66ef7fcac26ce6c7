//! HTTP front door for the resolver.
//!
//! Provides three endpoints:
//! - `/resolve` - unmask an allow-listed redirect URL
//! - `/health` - liveness probe
//! - `/metrics` - Prometheus-compatible outcome counters

mod handlers;
mod types;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::config::{Config, HOP_TIMEOUT};
use crate::initialization::init_redirect_client;
use crate::resolve::{AllowList, ReqwestTransport, ResolverSettings};
use handlers::{health_handler, metrics_handler, resolve_handler};

pub use types::{
    AppState, ErrorResponse, HealthResponse, ResolveQuery, ResolveResponse, SharedResolver,
};

/// Builds the router over the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/resolve", get(resolve_handler))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

/// Serves the router on an already bound listener until `shutdown` is cancelled.
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections.
pub async fn serve(listener: TcpListener, state: AppState, shutdown: CancellationToken) -> Result<()> {
    let app = build_router(state);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await
        .context("Resolver server error")?;

    log::info!("Resolver server stopped");
    Ok(())
}

/// Validates the config, builds the reqwest-backed resolver and serves it on
/// `config.bind` until `shutdown` is cancelled.
///
/// # Errors
///
/// Returns an error if the config is invalid, the HTTP client cannot be built,
/// or the address cannot be bound.
pub async fn run_server(config: Config, shutdown: CancellationToken) -> Result<()> {
    config.validate().context("Invalid configuration")?;

    let client = init_redirect_client(&config.user_agent, HOP_TIMEOUT)
        .context("Failed to initialize HTTP client")?;
    let settings = ResolverSettings {
        allow_list: AllowList::new(config.allowed_prefixes.clone()),
        ..Default::default()
    };
    let state = AppState::new(settings, Arc::new(ReqwestTransport::new(client)));

    let listener = TcpListener::bind(config.bind.as_str())
        .await
        .with_context(|| format!("Failed to bind resolver server to {}", config.bind))?;

    log::info!("Resolver listening on http://{}/", config.bind);
    log::info!("  - Resolve: http://{}/resolve?url=...", config.bind);
    log::info!("  - Metrics: http://{}/metrics", config.bind);
    for prefix in &config.allowed_prefixes {
        log::info!("  - Allowing inputs under {}", prefix);
    }

    serve(listener, state, shutdown).await
}
