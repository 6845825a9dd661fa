//! Benchmark catalog models

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// A named, path-located Compose project that can be turned on and off
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkTarget {
    /// Unique identifier, matched exactly on lookup
    #[serde(default)]
    pub name: String,
    /// Location of the target's Makefile and compose definition
    #[serde(default)]
    pub path: String,
}

impl BenchmarkTarget {
    /// Read an entry without validating its shape. Missing or non-string
    /// `name`/`path` values become empty strings.
    fn from_entry(entry: &Value) -> Self {
        let field = |key: &str| {
            entry
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            name: field("name"),
            path: field("path"),
        }
    }
}

/// The static collection of known targets, loaded once at startup.
///
/// The document is kept as loaded so it can be served back unchanged;
/// `benchmarks` is the lookup view over its `benchmarks` array.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    document: Value,
    pub benchmarks: Vec<BenchmarkTarget>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            document: json!({ "benchmarks": [] }),
            benchmarks: Vec::new(),
        }
    }
}

impl Catalog {
    /// Create a catalog from targets in load order
    pub fn new(benchmarks: Vec<BenchmarkTarget>) -> Self {
        Self {
            document: json!({ "benchmarks": benchmarks }),
            benchmarks,
        }
    }

    /// Wrap a loaded document. Each entry of its `benchmarks` array becomes
    /// a lookup entry, whatever its shape.
    pub fn from_document(document: Value) -> Self {
        let benchmarks = document
            .get("benchmarks")
            .and_then(Value::as_array)
            .map(|entries| entries.iter().map(BenchmarkTarget::from_entry).collect())
            .unwrap_or_default();

        Self {
            document,
            benchmarks,
        }
    }

    /// The document as loaded
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Find a target by exact name. The first entry wins on duplicates.
    pub fn find(&self, name: &str) -> Option<&BenchmarkTarget> {
        self.benchmarks.iter().find(|b| b.name == name)
    }

    pub fn len(&self) -> usize {
        self.benchmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.benchmarks.is_empty()
    }
}
