//! Remote engine — talks to a search engine over plain HTTP.
//!
//! # Wire contract
//!
//! ```text
//! POST {base_url}/search
//! Content-Type: application/json
//!
//! {"query": "<raw query>"}
//! ```
//!
//! A 2xx answer must carry a JSON body, which becomes the [`ResultSet`]
//! unchanged. The query travels in the body so it needs no URL encoding and
//! reaches the engine byte for byte.
//!
//! The HTTP exchange is async (hyper). [`SearchEngine::search`] blocks on the
//! runtime handle captured at construction, so it must be called from a
//! blocking context such as `tokio::task::spawn_blocking`, never from inside
//! an async task.

use crate::BuildError;
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::header::{ACCEPT, CONTENT_TYPE};
use hyper::{Method, Request, Uri};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use quarry_core::{EngineError, ResultSet, SearchEngine};
use serde::Serialize;
use tokio::runtime::Handle;

#[derive(Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
}

pub struct RemoteEngine {
    search_uri: Uri,
    client: Client<HttpConnector, Full<Bytes>>,
    runtime: Handle,
}

impl RemoteEngine {
    /// Build a client for the engine at `base_url` (e.g.
    /// `http://127.0.0.1:9200`). Only `http` URLs are supported.
    pub fn new(base_url: &str, runtime: Handle) -> Result<Self, BuildError> {
        let search_uri = search_uri(base_url)?;
        let client = Client::builder(TokioExecutor::new()).build_http();
        Ok(Self {
            search_uri,
            client,
            runtime,
        })
    }

    /// The endpoint every query is posted to.
    pub fn search_uri(&self) -> &Uri {
        &self.search_uri
    }

    /// Async form of [`SearchEngine::search`].
    pub async fn search_async(&self, query: &str) -> Result<ResultSet, EngineError> {
        let body = serde_json::to_vec(&SearchRequest { query })
            .map_err(|e| EngineError::Backend(e.to_string()))?;

        let request = Request::builder()
            .method(Method::POST)
            .uri(self.search_uri.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(Full::new(Bytes::from(body)))
            .map_err(|e| EngineError::Backend(e.to_string()))?;

        let response = self.client.request(request).await.map_err(|e| {
            if e.is_connect() {
                EngineError::Unavailable(e.to_string())
            } else {
                EngineError::Backend(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "engine rejected query");
            return Err(EngineError::Rejected {
                status: status.as_u16(),
            });
        }

        let bytes = response
            .into_body()
            .collect()
            .await
            .map_err(|e| EngineError::Backend(e.to_string()))?
            .to_bytes();

        serde_json::from_slice::<serde_json::Value>(&bytes)
            .map(ResultSet::new)
            .map_err(|e| EngineError::Decode(e.to_string()))
    }
}

impl SearchEngine for RemoteEngine {
    type Output = ResultSet;

    fn search(&self, query: &str) -> Result<ResultSet, EngineError> {
        self.runtime.block_on(self.search_async(query))
    }
}

fn search_uri(base_url: &str) -> Result<Uri, BuildError> {
    let invalid = |reason: String| BuildError::InvalidUrl {
        url: base_url.to_string(),
        reason,
    };

    let uri = format!("{}/search", base_url.trim_end_matches('/'))
        .parse::<Uri>()
        .map_err(|e| invalid(e.to_string()))?;

    match uri.scheme_str() {
        Some("http") => {}
        Some(other) => return Err(invalid(format!("unsupported scheme {other:?}"))),
        None => return Err(invalid("missing scheme".to_string())),
    }
    if uri.host().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    Ok(uri)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
