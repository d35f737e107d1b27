//! quarry — HTTP query surface for a search engine.
//!
//! Accepts a raw query at `/search/{query}`, hands it to a
//! [`SearchEngine`](quarry_core::SearchEngine), and returns the engine's
//! result set as JSON. This crate exposes the API layer and the server
//! bootstrap as public modules so that integration tests and benches can
//! build the router directly.
//!
//! # Architecture
//!
//! ```text
//! request ──► route table ──► search handler ──► engine (blocking pool)
//!                  │                                   │
//!                  ├──► /debug/pprof/*                 └──► JSON body
//!                  └──► static web client (fallback)
//! ```
//!
//! The engine clients live in `quarry-engine`; the shared types and config
//! in `quarry-core`.

pub mod api;
pub mod server;

pub use api::{ApiService, ServiceOptions};
