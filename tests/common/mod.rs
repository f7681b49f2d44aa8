//! Common test utilities and fixtures for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Path to the compiled `truncfmt` binary.
pub fn truncfmt_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_truncfmt"))
}

/// Creates a temporary directory for test fixtures.
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Creates a truncfmt.toml config file with specified content.
pub fn create_config_file(dir: &TempDir, content: &str) -> PathBuf {
    let config_path = dir.path().join("truncfmt.toml");
    std::fs::write(&config_path, content).expect("Failed to write config file");
    config_path
}

/// Creates an input file with one value per line.
pub fn create_input_file(dir: &TempDir, lines: &[&str]) -> PathBuf {
    let input_path = dir.path().join("values.txt");
    std::fs::write(&input_path, lines.join("\n")).expect("Failed to write input file");
    input_path
}

/// Builds a command running in `dir` with no inherited `TRUNCFMT_*` variables.
fn command_in(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new(truncfmt_bin());
    cmd.args(args);
    cmd.current_dir(dir);
    for (key, _) in std::env::vars() {
        if key.starts_with("TRUNCFMT_") {
            cmd.env_remove(key);
        }
    }
    cmd.env_remove("RUST_LOG");
    // Keep the user's own config out of the run
    cmd.env("XDG_CONFIG_HOME", dir);
    cmd
}

/// Runs the CLI in `dir` with specified arguments and captures output.
pub fn run_cli(dir: &Path, args: &[&str]) -> Output {
    command_in(dir, args)
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute command")
}

/// Runs the CLI in `dir` with environment overrides.
pub fn run_cli_with_env(dir: &Path, args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut cmd = command_in(dir, args);
    cmd.envs(env.iter().copied());
    cmd.stdin(Stdio::null())
        .output()
        .expect("Failed to execute command")
}

/// Runs the CLI in `dir`, feeding `stdin` to the process.
pub fn run_cli_with_stdin(dir: &Path, args: &[&str], stdin: &str) -> Output {
    use std::io::Write;

    let mut child = command_in(dir, args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");

    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for command")
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}
