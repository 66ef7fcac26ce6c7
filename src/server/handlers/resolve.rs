//! Redirect resolution handler.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::super::types::{AppState, ErrorResponse, ResolveQuery, ResolveResponse};
use crate::error_handling::Outcome;

/// `GET /resolve?url=...`
///
/// Responds `200 {"finalUrl": ...}` or `400 {"error": ...}`. A query string
/// that does not deserialize (e.g. a repeated `url`) gets
/// `400 {"error": "invalid query"}` and no resolution is attempted.
pub async fn resolve_handler(
    State(state): State<AppState>,
    query: Result<Query<ResolveQuery>, QueryRejection>,
) -> Response {
    let url = match query {
        Ok(Query(query)) => query.url.unwrap_or_default(),
        Err(rejection) => {
            log::debug!("Rejecting malformed resolve query: {}", rejection);
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "invalid query",
                }),
            )
                .into_response();
        }
    };

    match state.resolver.resolve(&url).await {
        Ok(resolved) => {
            state.stats.record(Outcome::Resolved);
            (
                StatusCode::OK,
                Json(ResolveResponse {
                    final_url: resolved.final_url,
                }),
            )
                .into_response()
        }
        Err(e) => {
            state.stats.record(e.outcome());
            e.into_response()
        }
    }
}
