//! Prometheus metrics handler.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt::Write;
use strum::IntoEnumIterator;

use super::super::types::AppState;
use crate::error_handling::Outcome;

/// Prometheus-compatible metrics endpoint
pub async fn metrics_handler(State(state): State<AppState>) -> Response {
    let mut metrics = format!(
        r#"# HELP link_resolver_requests_total Total number of resolution requests handled
# TYPE link_resolver_requests_total counter
link_resolver_requests_total {}

# HELP link_resolver_uptime_seconds Seconds since the server started
# TYPE link_resolver_uptime_seconds gauge
link_resolver_uptime_seconds {}

# HELP link_resolver_outcomes_total Resolution requests by outcome
# TYPE link_resolver_outcomes_total counter
"#,
        state.stats.total(),
        state.start_time.elapsed().as_secs_f64(),
    );

    for outcome in Outcome::iter() {
        // Writing to a String cannot fail
        let _ = writeln!(
            metrics,
            "link_resolver_outcomes_total{{outcome=\"{}\"}} {}",
            outcome,
            state.stats.count(outcome)
        );
    }

    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4")],
        metrics,
    )
        .into_response()
}
