//! Test environment for driving the mulcheck binary.
//!
//! Provides `TestEnv`, an isolated temp directory plus helpers to run the
//! real CLI inside it and inspect the outcome.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running a mulcheck CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated working directory with CLI execution helpers
pub struct TestEnv {
    work: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            work: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// The directory the CLI runs in
    pub fn dir(&self) -> &Path {
        self.work.path()
    }

    /// Path of a file inside the work directory
    pub fn path(&self, name: &str) -> PathBuf {
        self.work.path().join(name)
    }

    /// Write a file into the work directory
    pub fn write_file(&self, name: &str, content: &str) {
        std::fs::write(self.path(name), content).expect("Failed to write file");
    }

    /// Read a file from the work directory
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.path(name))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", name, e))
    }

    /// Write num1.txt, num2.txt and result.txt with the given contents
    pub fn seed_files(&self, num1: &str, num2: &str, result: &str) {
        self.write_file("num1.txt", num1);
        self.write_file("num2.txt", num2);
        self.write_file("result.txt", result);
    }

    /// Run mulcheck with the work directory as cwd
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run mulcheck with extra environment variables.
    ///
    /// MULCHECK_DIR is always scrubbed from the inherited environment first,
    /// so the outer shell cannot leak a directory into a test.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_mulcheck"));
        cmd.current_dir(self.work.path())
            .args(args)
            .env_remove("MULCHECK_DIR");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute mulcheck");
        output_to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
