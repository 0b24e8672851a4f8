//! Common test utilities for CLI integration tests.
//!
//! Every command runs with `HOME` pointed at a fresh temporary directory
//! and the `XHELPERS_*` variables removed, so the developer's own
//! configuration never leaks into a test.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ENV_VARS: [&str; 3] = [
    "XHELPERS_PATH_STYLE",
    "XHELPERS_TIMESTAMP_PRECISION",
    "XHELPERS_LOG_MODE",
];

/// Isolated environment for running the `xh` binary.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory, also used as `HOME`.
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Command builder for the `xh` binary with an isolated home.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("xh").expect("Failed to find xh binary");
        cmd.env("HOME", &self.temp_path)
            .env("USERPROFILE", &self.temp_path);
        for var in ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// The temp path as text with `/` separators and no trailing one.
    pub fn path_text(&self) -> String {
        self.temp_path.to_string_lossy().replace('\\', "/")
    }

    /// Write a file under the temp directory, creating parents.
    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write the user configuration file read from `~/.xhelpers/`.
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        self.write(".xhelpers/config.yaml", contents)
    }
}
