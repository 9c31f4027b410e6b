//! Two-phase collection of counterexample traces from the model checker's
//! output tree.
//!
//! Phase one ([`plan`]) enumerates configuration subdirectories and applies
//! the counterexample name predicate to their immediate entries; phase two
//! ([`execute`]) copies each surviving file individually into the
//! destination, merging into an existing directory and overwriting colliding
//! file names. A failed copy aborts the run and leaves earlier copies in
//! place.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use itfkit_core::{counterexample_index, is_counterexample_name};

/// Default model-checker output root, relative to the working directory.
pub const DEFAULT_SOURCE_ROOT: &str = "../model/_apalache-out";
/// Default destination for collected trace fixtures.
pub const DEFAULT_DEST: &str = "../generatedTraces";

#[derive(Debug, Error)]
pub enum CollectError {
    #[error("source root {} does not exist", .0.display())]
    MissingRoot(PathBuf),
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("io at {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CollectError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Source and destination paths for one collection run.
#[derive(Debug, Clone)]
pub struct CollectConfig {
    /// Root directory with one subdirectory per analyzed configuration.
    pub source_root: PathBuf,
    /// Directory the matching trace files are copied into.
    pub dest: PathBuf,
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            source_root: DEFAULT_SOURCE_ROOT.into(),
            dest: DEFAULT_DEST.into(),
        }
    }
}

/// One pending copy of a matching trace file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyItem {
    /// Name of the configuration subdirectory the file came from.
    pub config: String,
    pub source: PathBuf,
    pub dest: PathBuf,
}

/// Result of the enumeration phase.
#[derive(Debug, Clone, Default)]
pub struct CollectPlan {
    /// Copies to perform, ordered by configuration name then trace index.
    pub items: Vec<CopyItem>,
    /// Entries excluded by the filter (directories, non-matching names, stray
    /// files at the root), recorded for diagnostics.
    pub skipped: Vec<PathBuf>,
    /// Number of configuration subdirectories found.
    pub configs: usize,
}

/// One trace file that was copied, with its content digest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CopiedTrace {
    pub config: String,
    pub file_name: String,
    pub bytes: u64,
    pub sha256: String,
}

/// Result of the copy phase.
#[derive(Debug, Clone, Default)]
pub struct CollectReport {
    pub copied: Vec<CopiedTrace>,
    pub configs: usize,
}

/// Enumerate configuration subdirectories and the matching trace files inside
/// them.
///
/// Only immediate entries of each configuration directory are considered:
/// nested directories are excluded outright, and a matching file maps to
/// `dest/<file name>`. Sibling configurations carrying the same trace file
/// name collide on the destination path; the later one in sorted order wins,
/// mirroring the merge semantics of the copy phase.
pub fn plan(config: &CollectConfig) -> Result<CollectPlan, CollectError> {
    if !config.source_root.exists() {
        return Err(CollectError::MissingRoot(config.source_root.clone()));
    }
    if !config.source_root.is_dir() {
        return Err(CollectError::NotADirectory(config.source_root.clone()));
    }

    let mut out = CollectPlan::default();

    let mut config_dirs = Vec::new();
    let entries =
        fs::read_dir(&config.source_root).map_err(|e| CollectError::io(&config.source_root, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| CollectError::io(&config.source_root, e))?;
        let path = entry.path();
        if path.is_dir() {
            config_dirs.push((entry.file_name().to_string_lossy().into_owned(), path));
        } else {
            out.skipped.push(path);
        }
    }
    config_dirs.sort_by(|a, b| a.0.cmp(&b.0));
    out.configs = config_dirs.len();

    for (config_name, dir) in config_dirs {
        let mut files = Vec::new();
        let entries = fs::read_dir(&dir).map_err(|e| CollectError::io(&dir, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| CollectError::io(&dir, e))?;
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();
            if path.is_dir() || !is_counterexample_name(&name) {
                out.skipped.push(path);
            } else {
                files.push((name, path));
            }
        }
        files.sort_by(|a, b| {
            counterexample_index(&a.0)
                .cmp(&counterexample_index(&b.0))
                .then_with(|| a.0.cmp(&b.0))
        });
        for (name, path) in files {
            out.items.push(CopyItem {
                config: config_name.clone(),
                source: path,
                dest: config.dest.join(&name),
            });
        }
    }

    Ok(out)
}

/// Copy every planned item into the destination, creating it if needed.
///
/// Existing destination files are silently overwritten.
pub fn execute(config: &CollectConfig, plan: &CollectPlan) -> Result<CollectReport, CollectError> {
    fs::create_dir_all(&config.dest).map_err(|e| CollectError::io(&config.dest, e))?;

    let mut report = CollectReport {
        copied: Vec::new(),
        configs: plan.configs,
    };
    for item in &plan.items {
        let bytes = fs::copy(&item.source, &item.dest)
            .map_err(|e| CollectError::io(&item.source, e))?;
        let content = fs::read(&item.dest).map_err(|e| CollectError::io(&item.dest, e))?;
        report.copied.push(CopiedTrace {
            config: item.config.clone(),
            file_name: item
                .dest
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            bytes,
            sha256: sha256_hex(&content),
        });
    }
    Ok(report)
}

/// Plan and execute in one call.
pub fn collect(config: &CollectConfig) -> Result<CollectReport, CollectError> {
    let planned = plan(config)?;
    execute(config, &planned)
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    digest.iter().map(|b| format!("{b:02x}")).collect()
}
