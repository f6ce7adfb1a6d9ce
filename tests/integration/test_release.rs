//! Integration tests for the `release` command failure paths
//!
//! Only the paths that abort before any external tooling is needed can run
//! here; the happy path is covered by unit tests with a scripted runner.

use crate::helpers::{TestProject, cap_release, stderr_of};
use anyhow::Result;

const RECORD: &str = r#"{"version": "1.0.0", "build": 3, "appName": "demo"}"#;

#[test]
fn test_release_without_platform_aborts_early() -> Result<()> {
  let project = TestProject::new(RECORD)?;

  let output = cap_release(&project.path, &["release"])?;

  assert!(!output.status.success());
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr_of(&output).contains("platform"));

  // Aborted before touching anything
  assert_eq!(project.record_text()?, RECORD);
  Ok(())
}

#[test]
fn test_release_with_both_platforms_is_rejected_by_clap() -> Result<()> {
  let project = TestProject::new(RECORD)?;

  let output = cap_release(&project.path, &["release", "--ios", "--android"])?;

  assert!(!output.status.success());
  assert_eq!(project.record_text()?, RECORD);
  Ok(())
}

#[test]
fn test_release_without_record_fails_before_prompting() -> Result<()> {
  let project = TestProject::empty()?;

  // --force skips the git checks, so the first failure is the missing record
  let output = cap_release(&project.path, &["release", "--android", "--force"])?;

  assert!(!output.status.success());
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr_of(&output).contains("config.json"));
  Ok(())
}

#[test]
fn test_release_outside_a_repository_fails_the_checks() -> Result<()> {
  let project = TestProject::new(RECORD)?;

  // Tempdirs are not git repositories, so the branch query fails.
  // GIT_CEILING keeps git from walking up into some enclosing repo.
  let bin = env!("CARGO_BIN_EXE_cap-release");
  let output = std::process::Command::new(bin)
    .current_dir(&project.path)
    .env("GIT_CEILING_DIRECTORIES", project.path.parent().unwrap())
    .args(["release", "--android"])
    .output()?;

  assert!(!output.status.success());
  assert_eq!(project.record_text()?, RECORD);
  Ok(())
}
