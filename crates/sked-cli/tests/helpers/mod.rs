#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test harness running `sked` with an isolated config and scratch files.
pub struct CliTestHarness {
    temp_dir: TempDir,
    config_path: PathBuf,
}

impl CliTestHarness {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join("sked.toml");

        Self {
            temp_dir,
            config_path,
        }
    }

    /// Get a Command instance configured for testing
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("sked").expect("Failed to find sked binary");
        cmd.current_dir(self.temp_dir.path());
        cmd.env("SKED_CONFIG", &self.config_path);
        cmd.env_remove("RUST_LOG");
        cmd.env_remove("SKED_LIST_LIMIT");
        cmd.env_remove("SKED_LOG_LEVEL");
        cmd
    }

    pub fn write_config(&self, contents: &str) {
        std::fs::write(&self.config_path, contents).expect("Failed to write config");
    }

    /// Writes a scratch file and returns its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Helper to run a command and assert success
    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    /// Helper to run a command and assert failure
    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }

    /// Runs a command and returns its trimmed stdout, asserting success.
    pub fn stdout_of(&self, args: &[&str]) -> String {
        let output = self.run_success(args).get_output().stdout.clone();
        String::from_utf8(output).expect("stdout is not UTF-8").trim().to_string()
    }
}

/// Common test fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// A small task list spanning a few dates.
    pub fn task_list() -> &'static str {
        r#"[
            {"id":"1","date":"20240310","title":"Dentist","comment":"bring insurance card"},
            {"id":"2","date":"20240308","title":"Buy flowers"},
            {"id":"3","date":"20240308","title":"Gym","comment":"leg day","repeat":"w 1,3,5"},
            {"id":"4","date":"20240401","title":"Tax return","comment":"flowers for the accountant"}
        ]"#
    }

    pub fn recurring_task() -> &'static str {
        r#"{"id":"9","date":"20240501","title":"Backup","repeat":"d 7"}"#
    }

    pub fn one_off_task() -> &'static str {
        r#"{"id":"5","date":"20240501","title":"Return library book"}"#
    }
}

/// Utility functions for test assertions
pub mod assertions {
    use predicates::prelude::*;

    /// Predicate to check for error messages
    pub fn has_error() -> impl Predicate<str> {
        predicate::str::contains("Error").or(predicate::str::contains("error"))
    }

    /// Predicate to check if output contains task table headers
    pub fn has_task_table_headers() -> impl Predicate<str> {
        predicate::str::contains("ID")
            .and(predicate::str::contains("Date"))
            .and(predicate::str::contains("Title"))
    }
}
