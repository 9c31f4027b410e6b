//! Trace-collection harness for itfkit.
//!
//! This crate provides:
//! - Collection: two-phase (plan, then execute) copying of counterexample
//!   traces out of the model checker's output tree
//! - Manifest: JSON record of a collection run with SHA-256 digests per trace

#![forbid(unsafe_code)]

pub mod collect;
pub mod manifest;

pub use collect::{CollectConfig, CollectError, CollectPlan, CollectReport, CopiedTrace};
pub use manifest::CollectManifest;
