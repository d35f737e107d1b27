//! quarry-core — shared types for the quarry query surface.
//!
//! This crate defines what the HTTP layer and the engine clients agree on:
//! the [`Query`] and [`ResultSet`] values, the synchronous [`SearchEngine`]
//! contract, and the layered [`Config`](config::Config).
//!
//! # Architecture
//!
//! ```text
//! HTTP request ──► Route table ──► Search handler ──► SearchEngine
//!                       │                                  │
//!                       └──► static / diagnostics          └──► ResultSet ──► JSON
//! ```
//!
//! The engine is an external collaborator; nothing in this workspace ranks,
//! tokenizes or stores documents.

pub mod config;
pub mod engine;
pub mod types;

pub use engine::{EngineError, SearchEngine};
pub use types::{Query, ResultSet};
