//! Recursive discovery of `journal.log` files under a root directory.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::errors::{BenchError, BenchResult};

/// File name every solver run writes its log under.
pub const JOURNAL_LOG: &str = "journal.log";

/// Walks `root` and returns every regular file named exactly `journal.log`,
/// in traversal order.
///
/// The root itself must be an existing directory; anything else is rejected
/// before the walk starts.
pub fn collect_journal_logs(root: &Path) -> BenchResult<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(BenchError::InvalidLogDir {
            path: root.to_path_buf(),
        });
    }

    let mut logs = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|err| {
            let path = err.path().map(Path::to_path_buf);
            let source = err.into_io_error().unwrap_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::Other, "directory walk aborted")
            });
            BenchError::io(path, "walk log directory", source)
        })?;
        if entry.file_type().is_file() && entry.file_name() == JOURNAL_LOG {
            logs.push(entry.into_path());
        }
    }

    tracing::debug!("found {} journal logs under {}", logs.len(), root.display());
    Ok(logs)
}
