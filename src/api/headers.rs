//! Response header policy for the search endpoint.
//!
//! Every response produced under `/search/` carries the same four headers,
//! whatever the outcome: success, engine failure, bad path segment, preflight,
//! or a 405 for the wrong method. They are stamped by a layer on the search
//! sub-router, overriding anything a handler or extractor set.
//!
//! `tower_http::cors::CorsLayer` is not used here: it only emits
//! `Access-Control-Allow-*` when the request carries an `Origin` header, and
//! the allow-methods/headers only on preflight. Callers of this API rely on
//! seeing them unconditionally.

use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE,
};
use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, OPTIONS";
pub const ALLOW_HEADERS: &str =
    "Accept, Content-Type, Content-Length, Accept-Encoding, X-CSRF-Token, Authorization";

/// The fixed header set of every search response.
pub const SEARCH_RESPONSE_HEADERS: [(HeaderName, &str); 4] = [
    (CONTENT_TYPE, JSON_CONTENT_TYPE),
    (ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN),
    (ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS),
    (ACCESS_CONTROL_ALLOW_HEADERS, ALLOW_HEADERS),
];

/// Wrap every route of `router` so its responses carry
/// [`SEARCH_RESPONSE_HEADERS`].
pub fn with_search_headers<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    SEARCH_RESPONSE_HEADERS
        .into_iter()
        .fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::overriding(
                name,
                HeaderValue::from_static(value),
            ))
        })
}
