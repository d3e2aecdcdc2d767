//! YAML serialization of the aggregated benchmark batch.

use std::fs;
use std::path::{Path, PathBuf};

use optbench_common::BenchmarkRecord;

use super::errors::{BenchError, BenchResult};

/// File name of the generated report inside the output directory.
pub const BENCHMARK_FILE: &str = "benchmark.yml";

/// Serializes `records` as a block-style YAML sequence of mappings and
/// writes it to `<dir_out>/benchmark.yml`, overwriting any existing file.
///
/// Returns the path of the written report. The output directory is assumed
/// to exist and be writable.
pub fn write_benchmark(records: &[BenchmarkRecord], dir_out: &Path) -> BenchResult<PathBuf> {
    let rendered =
        serde_yaml::to_string(records).map_err(|source| BenchError::Serialize { source })?;
    let target = dir_out.join(BENCHMARK_FILE);
    fs::write(&target, rendered).map_err(|source| {
        BenchError::io(Some(target.clone()), "write benchmark report", source)
    })?;

    tracing::info!("benchmark report written to {}", target.display());
    Ok(target)
}
