//! Fixture engine — canned results keyed by exact query text.
//!
//! Used for local development of the web client and in tests. The fixture
//! file is a single JSON object; each key is a query and each value is
//! returned verbatim for that query. Queries not present get the fallback
//! result, an empty array unless overridden.

use crate::BuildError;
use quarry_core::{EngineError, ResultSet, SearchEngine};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct FixtureEngine {
    results: HashMap<String, ResultSet>,
    fallback: ResultSet,
}

impl FixtureEngine {
    pub fn new(results: HashMap<String, ResultSet>) -> Self {
        Self {
            results,
            fallback: ResultSet::empty(),
        }
    }

    /// Load a fixture file. The file must hold a JSON object.
    pub fn from_path(path: &Path) -> Result<Self, BuildError> {
        let raw = std::fs::read_to_string(path).map_err(|source| BuildError::FixtureIo {
            path: path.to_path_buf(),
            source,
        })?;
        let results: HashMap<String, ResultSet> =
            serde_json::from_str(&raw).map_err(|source| BuildError::FixtureFormat {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::new(results))
    }

    /// Result returned for queries the fixture does not list.
    pub fn with_fallback(mut self, fallback: ResultSet) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn insert(&mut self, query: impl Into<String>, result: ResultSet) {
        self.results.insert(query.into(), result);
    }

    /// Number of queries with a canned result.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl SearchEngine for FixtureEngine {
    type Output = ResultSet;

    fn search(&self, query: &str) -> Result<ResultSet, EngineError> {
        Ok(self
            .results
            .get(query)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
