//! The engine contract.
//!
//! quarry never searches anything itself. Every query is handed to an
//! implementation of [`SearchEngine`], whose `search` call is synchronous and
//! returns either a serializable result or an [`EngineError`]. An empty result
//! is a success; only `Err` means the engine failed.

use std::sync::Arc;

use thiserror::Error;

/// Failure reported by an engine client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The engine could not be reached at all (connection refused, DNS, …).
    #[error("search engine unavailable: {0}")]
    Unavailable(String),

    /// The engine answered, but with a non-success status.
    #[error("search engine rejected the query with status {status}")]
    Rejected { status: u16 },

    /// The engine answered with a body that is not valid JSON.
    #[error("search engine returned an undecodable body: {0}")]
    Decode(String),

    /// Any other engine-side failure.
    #[error("search engine failed: {0}")]
    Backend(String),
}

impl EngineError {
    /// Whether the failure means the engine is unreachable, as opposed to
    /// reachable but misbehaving.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, EngineError::Unavailable(_))
    }
}

/// A synchronous search capability.
///
/// Implementations must be shareable across request-handling threads. They
/// may block; callers in async code run them on a blocking pool.
pub trait SearchEngine: Send + Sync {
    /// The value handed back to callers. It is serialized verbatim.
    type Output: serde::Serialize + Send + 'static;

    fn search(&self, query: &str) -> Result<Self::Output, EngineError>;
}

impl<E: SearchEngine + ?Sized> SearchEngine for Box<E> {
    type Output = E::Output;

    fn search(&self, query: &str) -> Result<Self::Output, EngineError> {
        (**self).search(query)
    }
}

impl<E: SearchEngine + ?Sized> SearchEngine for Arc<E> {
    type Output = E::Output;

    fn search(&self, query: &str) -> Result<Self::Output, EngineError> {
        (**self).search(query)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
