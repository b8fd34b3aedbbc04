//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with an isolated home directory
//! - Command builder helpers with a clean environment
//! - Configuration file fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A user name no system is expected to have.
#[allow(dead_code)]
pub const MISSING_USER: &str = "confpath-no-such-user";

/// Environment variables read by the binary.
const CONFPATH_VARS: [&str; 6] = [
    "CONFPATH_CONFIG",
    "CONFPATH_USER",
    "CONFPATH_FILESYSTEM_CHARSET",
    "CONFPATH_ENFORCE_ABSOLUTE",
    "CONFPATH_LOG_TIMESTAMP",
    "CONFPATH_LOG_MODE",
];

/// Test environment with an isolated home directory.
///
/// `HOME` points at `<temp>/home` for every command, so `~` and the user
/// configuration are under test control.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// The simulated home directory
    pub home: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with an empty home directory.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let home = temp_path.join("home");
        std::fs::create_dir_all(&home).expect("Failed to create home directory");

        Self {
            temp_dir,
            temp_path,
            home,
        }
    }

    /// Get a command builder for the confpath binary with a clean environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("confpath").expect("Failed to find confpath binary");
        for var in CONFPATH_VARS {
            cmd.env_remove(var);
        }
        cmd.env("HOME", &self.home);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a configuration file under the temporary directory.
    pub fn write_config(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write config file");
        path
    }

    /// Write `~/.confpath/config.yaml` inside the simulated home.
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        let dir = self.home.join(".confpath");
        std::fs::create_dir_all(&dir).expect("Failed to create user config dir");
        let path = dir.join("config.yaml");
        std::fs::write(&path, contents).expect("Failed to write user config");
        path
    }

    /// The simulated home joined with `rest`, as printed by the binary.
    pub fn home_path(&self, rest: &str) -> String {
        if rest.is_empty() {
            self.home.display().to_string()
        } else {
            self.home.join(rest).display().to_string()
        }
    }
}
