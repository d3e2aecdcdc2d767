//! Common helpers for optbench integration tests

use std::fs;
use std::path::Path;

use assert_cmd::Command;

pub struct Tmp {
    pub dir: tempfile::TempDir,
}

impl Tmp {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, rel: &str, data: &str) {
        let p = self.path().join(rel);
        if let Some(parent) = p.parent() {
            fs::create_dir_all(parent).ok();
        }
        fs::write(p, data).unwrap();
    }

    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path().join(rel)).unwrap()
    }
}

/// Journal log body carrying the two required fields.
pub fn journal_body(solver: &str, elapsed: &str) -> String {
    format!(
        "solver starting\nPlugin: {solver}\niterating...\ntotal elapsed time: {elapsed}\ndone\n"
    )
}

/// The binary under test with input and output directories preset.
pub fn optbench(dir_in: &Path, dir_out: &Path) -> Command {
    let mut cmd = Command::cargo_bin("optbench").expect("optbench binary");
    cmd.arg("--dir-in")
        .arg(dir_in)
        .arg("--dir-out")
        .arg(dir_out);
    cmd
}
