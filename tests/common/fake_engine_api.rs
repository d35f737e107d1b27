//! Fake search engine HTTP server for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. Serves `POST /search` with the wire contract of
//! `quarry_engine::RemoteEngine`: a `{"query": ...}` body in, the scripted
//! JSON (or status) out. Every received query is recorded.
//!
//! # Example
//!
//! ```rust,no_run
//! let api = FakeEngineApi::start().await.unwrap();
//! api.respond("hello", serde_json::json!({"hits": []})).await;
//! let engine = RemoteEngine::new(&api.base_url(), Handle::current()).unwrap();
//! ```

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde::Deserialize;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// What the fake answers for one query.
#[derive(Clone)]
pub enum Scripted {
    Json(serde_json::Value),
    Status(StatusCode),
    /// 200 with a body that is not JSON.
    Garbage(&'static str),
}

#[derive(Default)]
struct ApiState {
    responses: HashMap<String, Scripted>,
    received: Vec<String>,
}

#[derive(Deserialize)]
struct SearchBody {
    query: String,
}

/// Handle to the running fake engine server.
pub struct FakeEngineApi {
    addr: SocketAddr,
    state: Arc<Mutex<ApiState>>,
}

impl FakeEngineApi {
    /// Start the server on a random port. Returns once it is listening.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(ApiState::default()));

        let app = Router::new()
            .route("/search", post(search))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr, state })
    }

    /// Base URL for the API (e.g. `http://127.0.0.1:PORT`).
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn respond(&self, query: &str, value: serde_json::Value) {
        self.script(query, Scripted::Json(value)).await;
    }

    pub async fn script(&self, query: &str, scripted: Scripted) {
        self.state
            .lock()
            .await
            .responses
            .insert(query.to_string(), scripted);
    }

    /// Queries received so far, in arrival order.
    pub async fn received(&self) -> Vec<String> {
        self.state.lock().await.received.clone()
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

async fn search(
    State(state): State<Arc<Mutex<ApiState>>>,
    Json(body): Json<SearchBody>,
) -> axum::response::Response {
    let scripted = {
        let mut state = state.lock().await;
        state.received.push(body.query.clone());
        state.responses.get(&body.query).cloned()
    };

    match scripted {
        Some(Scripted::Json(value)) => Json(value).into_response(),
        Some(Scripted::Status(status)) => status.into_response(),
        Some(Scripted::Garbage(text)) => (StatusCode::OK, text).into_response(),
        None => Json(serde_json::json!([])).into_response(),
    }
}
