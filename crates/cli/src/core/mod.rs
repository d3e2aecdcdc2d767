//! # Benchmark Aggregation Core
//!
//! Single-pass pipeline over a tree of solver run logs:
//!
//! - **Collection**: walk the root directory for `journal.log` files
//! - **Extraction**: one [`BenchmarkRecord`] per log, regex-matched fields
//! - **Reporting**: serialize the ordered batch to `benchmark.yml`
//!
//! The pipeline is fail-fast: the first error in any stage aborts the whole
//! run and no report is written.

pub mod collect;
pub mod errors;
pub mod extract;
pub mod report;

pub use optbench_common::{BenchmarkRecord, ReportConfig};

use errors::BenchResult;

/// Runs one aggregation pass described by `config`.
///
/// Collects journal logs under `dir_in`, then, unless report generation is
/// disabled, extracts one record per log in traversal order and writes the
/// batch to `<dir_out>/benchmark.yml`. Returns the extracted records (empty
/// when generation is disabled).
pub fn run(config: &ReportConfig) -> BenchResult<Vec<BenchmarkRecord>> {
    let logs = collect::collect_journal_logs(&config.dir_in)?;

    if !config.benchmark {
        tracing::info!(
            "benchmark generation disabled; {} journal logs collected",
            logs.len()
        );
        return Ok(Vec::new());
    }

    let mut records = Vec::with_capacity(logs.len());
    for log in &logs {
        records.push(extract::extract_record(log)?);
    }

    report::write_benchmark(&records, &config.dir_out)?;
    Ok(records)
}
