//! quarry-engine — search engine clients for quarry.
//!
//! Each client implements [`quarry_core::SearchEngine`] with
//! [`ResultSet`] as its output, so the HTTP layer can pass results through
//! without knowing where they came from. [`build_engine`] picks one from the
//! `[engine]` config section.

pub mod fixture;
pub mod remote;

use quarry_core::config::{EngineConfig, EngineKind};
use quarry_core::{ResultSet, SearchEngine};
use std::path::PathBuf;
use thiserror::Error;

pub use fixture::FixtureEngine;
pub use remote::RemoteEngine;

/// A type-erased engine, as stored by the binary.
pub type DynEngine = Box<dyn SearchEngine<Output = ResultSet>>;

/// Errors raised while constructing an engine client. Failures during a
/// search are reported as [`quarry_core::EngineError`] instead.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid engine url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to read fixture {path}: {source}")]
    FixtureIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("fixture {path} is not a JSON object of query → result: {source}")]
    FixtureFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Construct the engine client selected by `config`.
///
/// `runtime` is only used by the remote client, which blocks on it to give
/// its async HTTP exchange a synchronous face.
pub fn build_engine(
    config: &EngineConfig,
    runtime: tokio::runtime::Handle,
) -> Result<DynEngine, BuildError> {
    match config.kind {
        EngineKind::Remote => {
            let engine = RemoteEngine::new(&config.url, runtime)?;
            tracing::info!(url = %config.url, "using remote search engine");
            Ok(Box::new(engine))
        }
        EngineKind::Fixture => {
            let engine = FixtureEngine::from_path(&config.fixture)?;
            tracing::info!(
                path = %config.fixture.display(),
                queries = engine.len(),
                "using fixture search engine"
            );
            Ok(Box::new(engine))
        }
    }
}
