//! Search handler.
//!
//! Takes the `{query}` path segment as the router decoded it, hands it to the
//! engine on tokio's blocking pool, and writes the engine's value back as
//! JSON. Response headers are applied by the layer in
//! [`headers`](super::headers), not here.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use quarry_core::{Query, SearchEngine};

use super::error::ApiError;
use super::headers::JSON_CONTENT_TYPE;

/// State of the search sub-router: the shared engine reference.
pub struct SearchState<E> {
    pub engine: Arc<E>,
}

// Manual impl: deriving would demand `E: Clone`.
impl<E> Clone for SearchState<E> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
        }
    }
}

/// `GET /search/{query}`
pub async fn search<E>(
    State(state): State<SearchState<E>>,
    query: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError>
where
    E: SearchEngine + 'static,
{
    let Path(raw) = query.map_err(|rejection| ApiError::InvalidQuery(rejection.body_text()))?;
    execute(state.engine, Query::new(raw)).await
}

/// `GET /search/` — the empty query.
pub async fn search_empty<E>(State(state): State<SearchState<E>>) -> Result<Response, ApiError>
where
    E: SearchEngine + 'static,
{
    execute(state.engine, Query::default()).await
}

/// `OPTIONS /search/...` — answered without touching the engine.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn execute<E>(engine: Arc<E>, query: Query) -> Result<Response, ApiError>
where
    E: SearchEngine + 'static,
{
    let started = Instant::now();
    let query_len = query.len();

    let outcome = tokio::task::spawn_blocking(move || engine.search(query.as_str()))
        .await
        .map_err(|join| ApiError::Internal(join.to_string()))
        .and_then(|searched| searched.map_err(ApiError::from))
        .and_then(|output| serde_json::to_vec(&output).map_err(ApiError::from));

    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    match outcome {
        Ok(body) => {
            tracing::debug!(query_len, bytes = body.len(), elapsed_ms, "search ok");
            Ok(([(CONTENT_TYPE, JSON_CONTENT_TYPE)], body).into_response())
        }
        Err(err) => {
            tracing::warn!(query_len, elapsed_ms, error = %err, "search failed");
            Err(err)
        }
    }
}
