//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test file uses every fixture

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the ebu-prompt-helper binary
pub fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_ebu-prompt-helper")
}

/// Creates a Command whose config directory is `config_dir`.
pub fn command_in(config_dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new(bin());
    cmd.env("EBU_PROMPT_HELPER_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs the binary against a fresh, empty config directory.
pub fn run(args: &[&str]) -> Output {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    run_in(temp_dir.path(), args)
}

/// Runs the binary against `config_dir`.
pub fn run_in(config_dir: &Path, args: &[&str]) -> Output {
    command_in(config_dir, args)
        .output()
        .expect("Failed to execute command")
}

/// Asserts a zero exit code and returns stdout.
pub fn stdout_ok(output: &Output) -> String {
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Asserts success and parses stdout as JSON.
pub fn json_ok(output: &Output) -> serde_json::Value {
    let stdout = stdout_ok(output);
    serde_json::from_str(&stdout).expect("Output should be valid JSON")
}

/// Stderr as text.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
