//! Core logic for itfkit model-based-testing fixture tooling.
//!
//! This crate provides:
//! - Stub generation: render per-trace test function stubs for a numbered
//!   fixture range
//! - Trace naming: the counterexample file-name predicate applied during
//!   trace collection
//! - ITF model: minimal trace representation for summaries

#![forbid(unsafe_code)]

pub mod itf;
pub mod stubgen;
pub mod trace_name;

pub use itf::{ItfTrace, TraceSummary};
pub use stubgen::StubRange;
pub use trace_name::{counterexample_index, is_counterexample_name};
