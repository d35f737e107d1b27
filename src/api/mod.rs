//! HTTP API layer.
//!
//! [`ApiService::new`] mounts every entry of the [route table](routes) onto a
//! caller-supplied [`axum::Router`] and keeps the engine reference. After that
//! the router is read-only and shared by all request tasks; there is nothing
//! to lock and nothing to tear down.
//!
//! # Endpoints
//!
//! - `/search/{query}`, `/search/` — engine pass-through, JSON + CORS headers
//! - `/debug/pprof/*` — runtime introspection (optional)
//! - everything else — static web client from the assets root

pub mod assets;
pub mod diagnostics;
pub mod error;
pub mod headers;
pub mod routes;
pub mod search;

use std::path::PathBuf;
use std::sync::Arc;

use axum::routing::{get, MethodRouter};
use axum::Router;
use chrono::Utc;
use quarry_core::config::Config;
use quarry_core::SearchEngine;
use tower_http::trace::TraceLayer;

use self::diagnostics::DiagnosticsState;
use self::routes::{active_routes, RouteHandler};
use self::search::SearchState;

pub use self::error::{ApiError, ErrorResponse};
pub use self::routes::{Route, ROUTE_TABLE};

/// Construction-time knobs for [`ApiService`].
#[derive(Debug, Clone)]
pub struct ServiceOptions {
    /// Directory served for unmatched paths.
    pub assets_root: PathBuf,
    /// Whether `/debug/pprof/*` is mounted.
    pub diagnostics: bool,
}

impl ServiceOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            assets_root: config.assets.root.clone(),
            diagnostics: config.diagnostics.enabled,
        }
    }
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self::from_config(&Config::defaults())
    }
}

/// The API service: a fully-routed [`Router`] plus the engine it dispatches to.
pub struct ApiService<E> {
    router: Router,
    engine: Arc<E>,
}

impl<E> ApiService<E>
where
    E: SearchEngine + 'static,
{
    /// Bind diagnostics, search and the static fallback onto `router`, in
    /// [`ROUTE_TABLE`] order.
    pub fn new(router: Router, engine: Arc<E>, options: ServiceOptions) -> Self {
        let search_state = SearchState {
            engine: Arc::clone(&engine),
        };
        let diagnostics_state = DiagnosticsState {
            started_at: Utc::now(),
        };

        let mut search_routes: Router<SearchState<E>> = Router::new();
        let mut diagnostics_routes: Router<DiagnosticsState> = Router::new();
        let mut fallback = None;

        for route in active_routes(options.diagnostics) {
            let pattern = route.pattern;
            match route.handler {
                RouteHandler::Search => {
                    search_routes =
                        search_routes.route(pattern, search_method(search::search::<E>));
                }
                RouteHandler::SearchEmpty => {
                    search_routes =
                        search_routes.route(pattern, search_method(search::search_empty::<E>));
                }
                RouteHandler::DiagnosticsIndex => {
                    diagnostics_routes =
                        diagnostics_routes.route(pattern, get(diagnostics::index));
                }
                RouteHandler::DiagnosticsCmdline => {
                    diagnostics_routes =
                        diagnostics_routes.route(pattern, get(diagnostics::cmdline));
                }
                RouteHandler::DiagnosticsRuntime => {
                    diagnostics_routes =
                        diagnostics_routes.route(pattern, get(diagnostics::runtime));
                }
                RouteHandler::DiagnosticsBuild => {
                    diagnostics_routes =
                        diagnostics_routes.route(pattern, get(diagnostics::build));
                }
                RouteHandler::StaticAssets => {
                    fallback = Some(assets::service(&options.assets_root));
                }
            }
        }

        // The fallback only sees requests that no explicit route matched, so
        // the catch-all can never shadow search or diagnostics.
        let mut router = router
            .merge(headers::with_search_headers(
                search_routes.with_state::<()>(search_state),
            ))
            .merge(diagnostics_routes.with_state::<()>(diagnostics_state));
        if let Some(assets) = fallback {
            router = router.fallback_service(assets);
        }

        tracing::debug!(
            diagnostics = options.diagnostics,
            assets = %options.assets_root.display(),
            "api routes mounted"
        );

        Self {
            router: router.layer(TraceLayer::new_for_http()),
            engine,
        }
    }

    pub fn engine(&self) -> &Arc<E> {
        &self.engine
    }

    /// The finished router, ready for `axum::serve` or `oneshot`.
    pub fn into_router(self) -> Router {
        self.router
    }
}

fn search_method<H, T, E>(handler: H) -> MethodRouter<SearchState<E>>
where
    H: axum::handler::Handler<T, SearchState<E>>,
    T: 'static,
    E: SearchEngine + 'static,
{
    get(handler).options(search::preflight)
}
