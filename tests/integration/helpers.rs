//! Test helpers for integration tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// A throwaway Capacitor-shaped project directory
pub struct TestProject {
  _root: TempDir,
  pub path: PathBuf,
}

impl TestProject {
  /// Create a project with a release record at the default location
  pub fn new(record_json: &str) -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();

    std::fs::create_dir(path.join("src"))?;
    std::fs::write(path.join("src/config.json"), record_json)?;

    Ok(Self { _root: root, path })
  }

  /// Create a project directory without any release record
  pub fn empty() -> Result<Self> {
    let root = TempDir::new()?;
    let path = root.path().to_path_buf();
    Ok(Self { _root: root, path })
  }

  /// Read the release record back as raw text
  pub fn record_text(&self) -> Result<String> {
    std::fs::read_to_string(self.path.join("src/config.json")).context("record missing")
  }
}

/// Run the cap-release binary and capture its output, whatever the exit code
pub fn cap_release(cwd: &Path, args: &[&str]) -> Result<Output> {
  let bin = env!("CARGO_BIN_EXE_cap-release");

  Command::new(bin)
    .current_dir(cwd)
    .args(args)
    .output()
    .context("Failed to run cap-release")
}

pub fn stderr_of(output: &Output) -> String {
  String::from_utf8_lossy(&output.stderr).into_owned()
}

pub fn stdout_of(output: &Output) -> String {
  String::from_utf8_lossy(&output.stdout).into_owned()
}
