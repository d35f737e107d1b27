//! Runtime introspection under `/debug/pprof/`.
//!
//! Read-only and unauthenticated; disable with `diagnostics.enabled = false`
//! on anything reachable from outside.

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::routes::ROUTE_TABLE;

#[derive(Debug, Clone)]
pub struct DiagnosticsState {
    pub started_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct Endpoint {
    pub path: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub endpoints: Vec<Endpoint>,
}

#[derive(Debug, Serialize)]
pub struct RuntimeResponse {
    pub flavor: String,
    pub workers: usize,
    pub alive_tasks: usize,
    pub global_queue_depth: usize,
}

#[derive(Debug, Serialize)]
pub struct BuildResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub started_at: DateTime<Utc>,
    pub uptime_secs: i64,
}

/// `GET /debug/pprof/`
pub async fn index() -> Json<IndexResponse> {
    let endpoints = ROUTE_TABLE
        .iter()
        .filter(|route| route.handler.is_diagnostics())
        .map(|route| Endpoint {
            path: route.pattern,
            description: route.handler.name(),
        })
        .collect();
    Json(IndexResponse { endpoints })
}

/// `GET /debug/pprof/cmdline` — arguments separated by NUL bytes.
pub async fn cmdline() -> impl IntoResponse {
    let args: Vec<String> = std::env::args().collect();
    ([(CONTENT_TYPE, "text/plain; charset=utf-8")], args.join("\0"))
}

/// `GET /debug/pprof/runtime`
pub async fn runtime() -> Json<RuntimeResponse> {
    let handle = tokio::runtime::Handle::current();
    let metrics = handle.metrics();
    Json(RuntimeResponse {
        flavor: format!("{:?}", handle.runtime_flavor()),
        workers: metrics.num_workers(),
        alive_tasks: metrics.num_alive_tasks(),
        global_queue_depth: metrics.global_queue_depth(),
    })
}

/// `GET /debug/pprof/build`
pub async fn build(State(state): State<DiagnosticsState>) -> Json<BuildResponse> {
    Json(BuildResponse {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        started_at: state.started_at,
        uptime_secs: (Utc::now() - state.started_at).num_seconds(),
    })
}
