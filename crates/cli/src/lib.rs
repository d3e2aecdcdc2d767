//! # Optbench CLI Library
//!
//! Core functionality for the `optbench` command-line tool: walk a tree of
//! solver run logs, extract timing records, emit an aggregated YAML report.

pub mod core;

// Re-export core types for convenience
pub use core::errors::{BenchError, BenchResult};
pub use optbench_common::{BenchmarkRecord, ReportConfig};
