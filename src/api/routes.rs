//! The route table.
//!
//! [`ROUTE_TABLE`] is the single, immutable list of everything the service
//! answers, in registration (= precedence) order. [`ApiService`] walks it once
//! at construction; nothing registers routes afterwards.
//!
//! The catch-all static entry is always last. It is mounted as the router
//! fallback rather than as a route, so it only sees requests no earlier entry
//! matched.
//!
//! [`ApiService`]: super::ApiService

/// What a route dispatches to. The HTTP methods are implied by the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteHandler {
    DiagnosticsIndex,
    DiagnosticsCmdline,
    DiagnosticsRuntime,
    DiagnosticsBuild,
    /// `/search/{query}`.
    Search,
    /// `/search/` — the same handler with the empty query.
    SearchEmpty,
    StaticAssets,
}

impl RouteHandler {
    pub fn methods(self) -> &'static [&'static str] {
        match self {
            RouteHandler::Search | RouteHandler::SearchEmpty => &["GET", "OPTIONS"],
            RouteHandler::StaticAssets => &["GET", "POST"],
            _ => &["GET"],
        }
    }

    pub fn is_diagnostics(self) -> bool {
        matches!(
            self,
            RouteHandler::DiagnosticsIndex
                | RouteHandler::DiagnosticsCmdline
                | RouteHandler::DiagnosticsRuntime
                | RouteHandler::DiagnosticsBuild
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            RouteHandler::DiagnosticsIndex => "diagnostics index",
            RouteHandler::DiagnosticsCmdline => "process command line",
            RouteHandler::DiagnosticsRuntime => "async runtime metrics",
            RouteHandler::DiagnosticsBuild => "build and uptime",
            RouteHandler::Search => "search",
            RouteHandler::SearchEmpty => "search (empty query)",
            RouteHandler::StaticAssets => "static web client",
        }
    }
}

/// One (path pattern, handler) binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    /// axum path syntax. The static entry uses `/*` for display only.
    pub pattern: &'static str,
    pub handler: RouteHandler,
}

pub const ROUTE_TABLE: &[Route] = &[
    Route {
        pattern: "/debug/pprof/",
        handler: RouteHandler::DiagnosticsIndex,
    },
    Route {
        pattern: "/debug/pprof/cmdline",
        handler: RouteHandler::DiagnosticsCmdline,
    },
    Route {
        pattern: "/debug/pprof/runtime",
        handler: RouteHandler::DiagnosticsRuntime,
    },
    Route {
        pattern: "/debug/pprof/build",
        handler: RouteHandler::DiagnosticsBuild,
    },
    Route {
        pattern: "/search/{query}",
        handler: RouteHandler::Search,
    },
    Route {
        pattern: "/search/",
        handler: RouteHandler::SearchEmpty,
    },
    Route {
        pattern: "/*",
        handler: RouteHandler::StaticAssets,
    },
];

/// Routes actually mounted for the given diagnostics setting, in order.
pub fn active_routes(diagnostics: bool) -> impl Iterator<Item = &'static Route> {
    ROUTE_TABLE
        .iter()
        .filter(move |route| diagnostics || !route.handler.is_diagnostics())
}

/// Human-readable listing, one route per line, used by `--print-routes`.
pub fn format_route_table(diagnostics: bool) -> String {
    active_routes(diagnostics)
        .map(|route| {
            format!(
                "{:<14}{:<24}{}",
                route.handler.methods().join(", "),
                route.pattern,
                route.handler.name()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
