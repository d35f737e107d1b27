//! Core value types for quarry-core.
//!
//! Both types are deliberately thin. A [`Query`] is whatever text the router
//! matched, and a [`ResultSet`] is whatever JSON the engine produced; this
//! layer never looks inside either.

use serde::{Deserialize, Serialize};

/// A raw search query, exactly as extracted from the URL path segment.
///
/// No trimming, case folding or validation is applied. The empty string is a
/// valid query and is forwarded to the engine unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Query(String);

impl Query {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in bytes. Logged instead of the query text itself.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Query {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Query {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// The opaque result of a search, produced only by an engine.
///
/// Serialization is transparent: the JSON written to the client is byte for
/// byte the JSON value the engine returned (modulo whitespace), with no
/// envelope and no added fields. Object keys keep the engine's order and
/// numbers keep their exact text, including integers wider than `u64` and
/// decimals beyond `f64` precision (`serde_json`'s `preserve_order` and
/// `arbitrary_precision` features).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet(serde_json::Value);

impl ResultSet {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// An empty JSON array, the conventional "no hits" result.
    pub fn empty() -> Self {
        Self(serde_json::Value::Array(Vec::new()))
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    pub fn into_value(self) -> serde_json::Value {
        self.0
    }
}

impl From<serde_json::Value> for ResultSet {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
