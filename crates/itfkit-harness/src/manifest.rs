//! JSON manifest of a collection run.
//!
//! Links collected trace fixtures to their content digests so a later run can
//! be compared for drift without re-reading the model checker's output tree.
//! Two runs over unchanged input produce equal manifests.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::collect::{CollectConfig, CollectReport, CopiedTrace};

/// Manifest schema version.
pub const MANIFEST_VERSION: &str = "v1";

/// Machine-readable record of one collection run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollectManifest {
    /// Schema version.
    pub version: String,
    /// Model-checker output root the traces were collected from.
    pub source_root: PathBuf,
    /// Destination directory the traces were copied into.
    pub dest: PathBuf,
    /// Collected traces, in plan order.
    pub traces: Vec<CopiedTrace>,
}

impl CollectManifest {
    /// Build a manifest from a finished collection run.
    #[must_use]
    pub fn from_report(config: &CollectConfig, report: &CollectReport) -> Self {
        Self {
            version: MANIFEST_VERSION.to_string(),
            source_root: config.source_root.clone(),
            dest: config.dest.clone(),
            traces: report.copied.clone(),
        }
    }

    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the manifest to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load a manifest from a file path.
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }

    /// Write the manifest as JSON to a file path.
    pub fn write(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
