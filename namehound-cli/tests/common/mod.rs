//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with a temporary static document
//! - Command builder helpers that point the binary at that document
//! - File fixtures for username lists

use assert_cmd::Command;
use namehound::config::CONFIG_PATH_ENV;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated static configuration document.
///
/// Each environment owns its own temporary directory and document, and
/// commands built from it carry `NAMEHOUND_CONFIG` per process, so tests
/// never race on global environment state.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the static configuration document.
    pub config_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a test environment with an empty-but-valid document.
    pub fn new() -> Self {
        Self::with_config("BaseConfig:\nPluginConfig:\n")
    }

    /// Create a test environment with the given document content.
    pub fn with_config(content: &str) -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, content).expect("Failed to write config document");

        Self {
            temp_dir,
            config_path,
        }
    }

    /// Get a command builder pointed at this environment's document.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.env(CONFIG_PATH_ENV, &self.config_path);
        cmd
    }

    /// Get a bare command builder with any inherited document override
    /// removed, so the binary falls back to its install-relative default.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("namehound").expect("Failed to find namehound binary");
        cmd.env_remove(CONFIG_PATH_ENV);
        cmd
    }

    /// Create a file in the test environment and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }
}
