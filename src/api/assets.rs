//! Static file fallback for the companion web client.
//!
//! Any path no route claimed is looked up under the assets root with its
//! leading `/` stripped. Missing files and a missing root both produce
//! `ServeDir`'s own 404; directories serve their `index.html`.
//!
//! `POST` is answered exactly like `GET`, so a form posting back to the
//! client gets the page (or the 404) instead of a 405. Other methods keep
//! `ServeDir`'s 405.

use std::path::Path;

use axum::extract::Request;
use axum::http::Method;
use tower::util::MapRequest;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;

/// The fallback service mounted by [`ApiService`](super::ApiService).
pub type AssetService = MapRequest<ServeDir, fn(Request) -> Request>;

pub fn service(root: &Path) -> AssetService {
    if !root.is_dir() {
        tracing::warn!(
            root = %root.display(),
            "assets root is not a directory; static requests will 404"
        );
    }
    ServiceBuilder::new()
        .map_request(post_as_get as fn(Request) -> Request)
        .service(ServeDir::new(root).append_index_html_on_directories(true))
}

fn post_as_get(mut request: Request) -> Request {
    if request.method() == Method::POST {
        *request.method_mut() = Method::GET;
    }
    request
}
