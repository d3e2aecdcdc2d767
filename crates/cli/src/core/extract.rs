//! Per-file field extraction.
//!
//! A journal log yields exactly one [`BenchmarkRecord`]: solver and elapsed
//! time come from regex matches on the file text, problem and test suite
//! from the position of the log in the directory tree.

use std::fs;
use std::path::Path;

use chrono::{NaiveTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;

use optbench_common::BenchmarkRecord;

use super::errors::{BenchError, BenchResult};

/// Placeholder test-suite value when the log sits directly under a solver
/// directory with no suite level above it.
pub const NO_TESTSUITE: &str = "n/a";

static SOLVER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Plugin: ([\w-]+)").expect("solver pattern"));
static ELAPSED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"total elapsed time: ([0-9:.]+)").expect("elapsed time pattern"));

/// Reads one journal log and assembles its benchmark record.
///
/// First match wins for both patterns. Either pattern missing, an
/// unparseable timestamp, or a too-shallow path aborts with an error.
pub fn extract_record(path: &Path) -> BenchResult<BenchmarkRecord> {
    let text = fs::read_to_string(path)
        .map_err(|source| BenchError::io(Some(path.to_path_buf()), "read journal log", source))?;

    let solver = SOLVER_RE
        .captures(&text)
        .map(|caps| caps[1].to_string())
        .ok_or_else(|| BenchError::MissingField {
            field: "Plugin",
            path: path.to_path_buf(),
        })?;

    let elapsed = ELAPSED_RE
        .captures(&text)
        .map(|caps| caps[1].to_string())
        .ok_or_else(|| BenchError::MissingField {
            field: "total elapsed time",
            path: path.to_path_buf(),
        })?;
    let time = fractional_seconds(&elapsed, path)?;

    let (problem, testsuite) = derive_path_fields(path, &solver)?;

    // Diagnostic trace, one field per line; not part of the report contract.
    println!("{}", path.display());
    println!("{solver}");
    println!("{problem}");
    println!("{time}");
    println!("{testsuite}");

    Ok(BenchmarkRecord {
        solver,
        testsuite,
        problem,
        time,
    })
}

/// Converts a `HH:MM:SS.ffffff` clock time into the reported duration.
///
/// Only the sub-second (microsecond) component contributes; hours, minutes
/// and whole seconds are discarded. `01:02:03.500000` therefore maps to
/// `0.5`, matching the report format consumed downstream.
fn fractional_seconds(raw: &str, path: &Path) -> BenchResult<f64> {
    let parsed =
        NaiveTime::parse_from_str(raw, "%H:%M:%S%.f").map_err(|source| {
            BenchError::InvalidTimestamp {
                value: raw.to_string(),
                path: path.to_path_buf(),
                source,
            }
        })?;
    let micros = parsed.nanosecond() / 1_000;
    Ok(1e-6 * f64::from(micros))
}

/// Derives `(problem, testsuite)` from the log path.
///
/// The second-to-last segment is the problem directory; the third-to-last
/// is the test suite unless it equals the solver name, in which case the
/// suite level is absent and `"n/a"` is reported.
fn derive_path_fields(path: &Path, solver: &str) -> BenchResult<(String, String)> {
    let segments: Vec<String> = path
        .iter()
        .map(|part| part.to_string_lossy().into_owned())
        .collect();
    if segments.len() < 3 {
        return Err(BenchError::PathDepth {
            path: path.to_path_buf(),
        });
    }

    let problem = segments[segments.len() - 2].clone();
    let above = &segments[segments.len() - 3];
    let testsuite = if above != solver {
        above.clone()
    } else {
        NO_TESTSUITE.to_string()
    };
    Ok((problem, testsuite))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn write_log(root: &Path, rel: &str, body: &str) -> PathBuf {
        let p = root.join(rel);
        fs::create_dir_all(p.parent().unwrap()).unwrap();
        fs::write(&p, body).unwrap();
        p
    }

    #[test]
    fn test_fractional_seconds_keeps_only_microseconds() {
        let p = Path::new("x/y/journal.log");
        assert_eq!(fractional_seconds("00:00:01.250000", p).unwrap(), 0.25);
        assert_eq!(fractional_seconds("01:02:03.500000", p).unwrap(), 0.5);
        assert_eq!(fractional_seconds("12:34:56.000001", p).unwrap(), 1e-6);
        assert_eq!(fractional_seconds("00:00:00.000000", p).unwrap(), 0.0);
    }

    #[test]
    fn test_fractional_seconds_rejects_garbage() {
        let p = Path::new("x/y/journal.log");
        let err = fractional_seconds("1:2", p).unwrap_err();
        assert_eq!(err.error_code(), "E_INVALID_TIMESTAMP");
        let err = fractional_seconds("::.", p).unwrap_err();
        assert_eq!(err.error_code(), "E_INVALID_TIMESTAMP");
    }

    #[test]
    fn test_path_derivation_with_suite_level() {
        let path = Path::new("root/suiteA/problemY/journal.log");
        let (problem, testsuite) = derive_path_fields(path, "solverX").unwrap();
        assert_eq!(problem, "problemY");
        assert_eq!(testsuite, "suiteA");
    }

    #[test]
    fn test_path_derivation_collapses_suite_to_na() {
        let path = Path::new("root/solverX/problemY/journal.log");
        let (problem, testsuite) = derive_path_fields(path, "solverX").unwrap();
        assert_eq!(problem, "problemY");
        assert_eq!(testsuite, NO_TESTSUITE);
    }

    #[test]
    fn test_shallow_path_is_rejected() {
        let path = Path::new("journal.log");
        let err = derive_path_fields(path, "solverX").unwrap_err();
        assert_eq!(err.error_code(), "E_PATH_DEPTH");

        let path = Path::new("problemY/journal.log");
        let err = derive_path_fields(path, "solverX").unwrap_err();
        assert_eq!(err.error_code(), "E_PATH_DEPTH");
    }

    #[test]
    fn test_extract_record_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let log = write_log(
            dir.path(),
            "suiteA/problemY/journal.log",
            "starting run\nPlugin: solverX\nsolving...\ntotal elapsed time: 00:00:01.250000\n",
        );
        let record = extract_record(&log).unwrap();
        assert_eq!(record.solver, "solverX");
        assert_eq!(record.testsuite, "suiteA");
        assert_eq!(record.problem, "problemY");
        assert_eq!(record.time, 0.25);
    }

    #[test]
    fn test_first_match_wins() {
        let dir = tempfile::tempdir().unwrap();
        let log = write_log(
            dir.path(),
            "s/solver-a/p/journal.log",
            "Plugin: solver-a\nPlugin: solver-b\n\
             total elapsed time: 00:00:00.100000\n\
             total elapsed time: 00:00:00.900000\n",
        );
        let record = extract_record(&log).unwrap();
        assert_eq!(record.solver, "solver-a");
        assert_eq!(record.time, 0.1);
    }

    #[test]
    fn test_missing_plugin_field() {
        let dir = tempfile::tempdir().unwrap();
        let log = write_log(
            dir.path(),
            "s/x/p/journal.log",
            "total elapsed time: 00:00:01.000000\n",
        );
        let err = extract_record(&log).unwrap_err();
        assert_eq!(err.error_code(), "E_MISSING_FIELD");
        assert!(err.to_string().contains("Plugin"));
    }

    #[test]
    fn test_missing_elapsed_time_field() {
        let dir = tempfile::tempdir().unwrap();
        let log = write_log(dir.path(), "s/x/p/journal.log", "Plugin: x\n");
        let err = extract_record(&log).unwrap_err();
        assert_eq!(err.error_code(), "E_MISSING_FIELD");
        assert!(err.to_string().contains("total elapsed time"));
    }
}
