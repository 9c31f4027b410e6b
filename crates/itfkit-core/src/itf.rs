//! Minimal ITF (Informal Trace Format) trace model.
//!
//! Counterexample files produced by the model checker are ITF JSON documents.
//! The tooling only needs the coarse shape (tool metadata, declared state
//! variables, and the state sequence), so states are kept as raw JSON values
//! rather than modeled per state variable.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItfTraceError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// A model-checker trace in ITF JSON form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItfTrace {
    /// Tool-provided metadata (`#meta`), kept opaque.
    #[serde(rename = "#meta", default)]
    pub meta: Value,
    /// Declared state variables.
    #[serde(default)]
    pub vars: Vec<String>,
    /// State sequence, in execution order.
    #[serde(default)]
    pub states: Vec<Value>,
}

impl ItfTrace {
    /// Parse a trace from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the trace to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load a trace from a file path.
    pub fn from_file(path: &Path) -> Result<Self, ItfTraceError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }

    /// Build a coarse summary of the trace.
    #[must_use]
    pub fn summarize(&self, name: &str) -> TraceSummary {
        TraceSummary {
            name: name.to_string(),
            state_count: self.states.len(),
            vars: self.vars.clone(),
        }
    }
}

/// Coarse description of a trace, emitted by the `summarize` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TraceSummary {
    /// Trace identifier (typically the file stem).
    pub name: String,
    /// Number of states in the sequence.
    pub state_count: usize,
    /// Declared state variables.
    pub vars: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"{
        "#meta": {"format": "ITF", "source": "Authz.tla"},
        "vars": ["active_grants", "num_execs"],
        "states": [
            {"#meta": {"index": 0}, "num_execs": 0},
            {"#meta": {"index": 1}, "num_execs": 1}
        ]
    }"##;

    #[test]
    fn parses_itf_document() {
        let trace = ItfTrace::from_json(SAMPLE).expect("valid ITF json");
        assert_eq!(trace.vars, vec!["active_grants", "num_execs"]);
        assert_eq!(trace.states.len(), 2);
        assert_eq!(trace.meta["format"], "ITF");
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let trace = ItfTrace::from_json("{}").expect("empty document is a valid trace shell");
        assert!(trace.vars.is_empty());
        assert!(trace.states.is_empty());
        assert!(trace.meta.is_null());
    }

    #[test]
    fn summary_counts_states() {
        let trace = ItfTrace::from_json(SAMPLE).expect("valid ITF json");
        let summary = trace.summarize("counterexample1");
        assert_eq!(summary.name, "counterexample1");
        assert_eq!(summary.state_count, 2);
        assert_eq!(summary.vars, trace.vars);
    }
}
