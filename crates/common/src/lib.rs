// # -----------------------------
// # crates/common/src/lib.rs
// # -----------------------------
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default root searched for journal logs when `--dir-in` is not given.
pub const DEFAULT_DIR_IN: &str = "/tmp/optbench-logs";
/// Default directory the benchmark report is written into.
pub const DEFAULT_DIR_OUT: &str = "/tmp";

/// One timing entry per discovered journal log.
///
/// Field order is load-bearing: the YAML report keeps keys in declaration
/// order (solver, testsuite, problem, time).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Solver plugin that produced the run, from the `Plugin:` log line.
    pub solver: String,
    /// Grouping directory above the solver/problem levels, or `"n/a"`.
    pub testsuite: String,
    /// Directory directly containing the journal log.
    pub problem: String,
    /// Reported duration in fractional seconds.
    pub time: f64,
}

/// Runtime configuration for one aggregation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Root directory searched recursively for `journal.log` files.
    pub dir_in: PathBuf,
    /// Directory the `benchmark.yml` report is written into.
    pub dir_out: PathBuf,
    /// When false, logs are collected but no report is generated.
    pub benchmark: bool,
}
