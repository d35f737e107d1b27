//! Test builders — scripted engines, a service builder, and request helpers.
//!
//! These are designed for readability in test assertions, not for production
//! use. They panic on invalid input rather than returning `Result`.

use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router;
use bytes::Bytes;
use quarry::{ApiService, ServiceOptions};
use quarry_core::{EngineError, ResultSet, SearchEngine};
use serde::ser::{Serialize, Serializer};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// RecordingEngine
// ---------------------------------------------------------------------------

/// An engine that records every query it receives.
///
/// Queries with a scripted result get that result; everything else gets
/// `{"query": <q>}` so responses are attributable to their request.
#[derive(Default)]
pub struct RecordingEngine {
    calls: Mutex<Vec<String>>,
    scripted: HashMap<String, Result<serde_json::Value, EngineError>>,
    delay: Option<Duration>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `value` for `query`.
    pub fn with_result(mut self, query: &str, value: serde_json::Value) -> Self {
        self.scripted.insert(query.to_string(), Ok(value));
        self
    }

    /// Fail `query` with `error`.
    pub fn with_error(mut self, query: &str, error: EngineError) -> Self {
        self.scripted.insert(query.to_string(), Err(error));
        self
    }

    /// Sleep this long inside every search (simulates a slow engine).
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Every query received so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl SearchEngine for RecordingEngine {
    type Output = ResultSet;

    fn search(&self, query: &str) -> Result<ResultSet, EngineError> {
        self.calls.lock().unwrap().push(query.to_string());
        if let Some(delay) = self.delay {
            std::thread::sleep(delay);
        }
        match self.scripted.get(query) {
            Some(Ok(value)) => Ok(ResultSet::new(value.clone())),
            Some(Err(err)) => Err(err.clone()),
            None => Ok(ResultSet::new(serde_json::json!({ "query": query }))),
        }
    }
}

// ---------------------------------------------------------------------------
// Misbehaving engines
// ---------------------------------------------------------------------------

/// A result type whose serialization always fails.
pub struct Unencodable;

impl Serialize for Unencodable {
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(serde::ser::Error::custom("result contains a cycle"))
    }
}

/// An engine whose results cannot be encoded as JSON.
pub struct UnencodableEngine;

impl SearchEngine for UnencodableEngine {
    type Output = Unencodable;

    fn search(&self, _query: &str) -> Result<Unencodable, EngineError> {
        Ok(Unencodable)
    }
}

/// An engine that panics on every call.
pub struct PanickingEngine;

impl SearchEngine for PanickingEngine {
    type Output = ResultSet;

    fn search(&self, query: &str) -> Result<ResultSet, EngineError> {
        panic!("engine bug while searching {query:?}")
    }
}

// ---------------------------------------------------------------------------
// Service builder
// ---------------------------------------------------------------------------

/// Build a router over `engine` with default options and a non-existent
/// assets root (every static lookup 404s).
pub fn router_with<E: SearchEngine + 'static>(engine: Arc<E>) -> Router {
    router_with_options(engine, options(missing_assets_root(), true))
}

pub fn router_with_options<E: SearchEngine + 'static>(
    engine: Arc<E>,
    options: ServiceOptions,
) -> Router {
    ApiService::new(Router::new(), engine, options).into_router()
}

pub fn options(assets_root: impl Into<PathBuf>, diagnostics: bool) -> ServiceOptions {
    ServiceOptions {
        assets_root: assets_root.into(),
        diagnostics,
    }
}

pub fn missing_assets_root() -> PathBuf {
    PathBuf::from("/nonexistent/quarry-test-assets")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// A fully buffered response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap_or_else(|e| {
            panic!(
                "body is not JSON ({e}): {:?}",
                String::from_utf8_lossy(&self.body)
            )
        })
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

pub async fn send(router: &Router, method: Method, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(router: &Router, uri: &str) -> TestResponse {
    send(router, Method::GET, uri).await
}

/// Percent-encode everything outside the RFC 3986 unreserved set, so any
/// string can be placed in a single path segment.
pub fn encode_segment(raw: &str) -> String {
    raw.bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                (b as char).to_string()
            }
            _ => format!("%{b:02X}"),
        })
        .collect()
}

/// `/search/{encoded q}`.
pub fn search_uri(query: &str) -> String {
    format!("/search/{}", encode_segment(query))
}
