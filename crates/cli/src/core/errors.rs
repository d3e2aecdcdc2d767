//! Error types for the benchmark aggregation pipeline.
//!
//! Every failure mode is fatal: the first error anywhere in the batch
//! aborts the run and no report is written.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for all pipeline operations.
pub type BenchResult<T> = Result<T, BenchError>;

#[derive(Debug, Error)]
pub enum BenchError {
    /// E_INVALID_LOG_DIR - The input root is missing or not a directory.
    #[error("invalid log directory: {}", path.display())]
    InvalidLogDir {
        /// Path given as `--dir-in`
        path: PathBuf,
    },

    /// E_MISSING_FIELD - A required pattern is absent from a log file.
    #[error("missing \"{field}\" field in log file {}", path.display())]
    MissingField {
        /// Name of the required field (`Plugin` or `total elapsed time`)
        field: &'static str,
        /// Log file that lacks the field
        path: PathBuf,
    },

    /// E_INVALID_TIMESTAMP - The elapsed-time text is not a valid clock time.
    #[error("invalid elapsed time \"{value}\" in log file {}: {source}", path.display())]
    InvalidTimestamp {
        /// Matched text that failed to parse
        value: String,
        /// Log file the text came from
        path: PathBuf,
        #[source]
        source: chrono::ParseError,
    },

    /// E_PATH_DEPTH - The log path is too shallow to derive problem and
    /// test suite (fewer than three segments).
    #[error("log path {} is too shallow to derive problem and test suite", path.display())]
    PathDepth {
        /// Offending log path
        path: PathBuf,
    },

    /// E_SERIALIZE - The record batch could not be rendered as YAML.
    #[error("failed to render benchmark report: {source}")]
    Serialize {
        #[source]
        source: serde_yaml::Error,
    },

    /// E_IO - A filesystem operation failed.
    #[error("I/O error in {operation}: {source}")]
    Io {
        /// Operation that was being performed
        operation: String,
        /// Path involved in the operation (if applicable)
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },
}

impl BenchError {
    /// Returns the machine-readable error code for this variant.
    pub fn error_code(&self) -> &'static str {
        match self {
            BenchError::InvalidLogDir { .. } => "E_INVALID_LOG_DIR",
            BenchError::MissingField { .. } => "E_MISSING_FIELD",
            BenchError::InvalidTimestamp { .. } => "E_INVALID_TIMESTAMP",
            BenchError::PathDepth { .. } => "E_PATH_DEPTH",
            BenchError::Serialize { .. } => "E_SERIALIZE",
            BenchError::Io { .. } => "E_IO",
        }
    }

    /// Helper for I/O errors with an optional path and an operation name.
    pub fn io<P, S>(path: P, operation: S, source: std::io::Error) -> Self
    where
        P: Into<Option<PathBuf>>,
        S: Into<String>,
    {
        Self::Io {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }
}
