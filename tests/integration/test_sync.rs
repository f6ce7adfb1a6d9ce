//! Integration tests for the `sync` command

use crate::helpers::{TestProject, cap_release, stderr_of, stdout_of};
use anyhow::Result;

const RECORD: &str = r#"{"version": "2.5.0", "build": 12, "appName": "demo"}"#;

#[test]
fn test_sync_without_native_projects_is_a_no_op() -> Result<()> {
  let project = TestProject::new(RECORD)?;

  let output = cap_release(&project.path, &["sync"])?;

  assert!(output.status.success(), "stderr: {}", stderr_of(&output));
  assert!(stdout_of(&output).contains("2.5.0"));

  // No native dirs exist, so nothing ran and the record is untouched
  assert_eq!(project.record_text()?, RECORD);
  Ok(())
}

#[test]
fn test_sync_without_record_fails() -> Result<()> {
  let project = TestProject::empty()?;

  let output = cap_release(&project.path, &["sync"])?;

  assert!(!output.status.success());
  assert_eq!(output.status.code(), Some(1));
  assert!(stderr_of(&output).contains("not found"));
  Ok(())
}

#[test]
fn test_sync_honors_config_flag() -> Result<()> {
  let project = TestProject::empty()?;
  std::fs::write(
    project.path.join("release.json"),
    r#"{"version": "0.9.1", "build": 2}"#,
  )?;

  let output = cap_release(&project.path, &["sync", "--config", "release.json"])?;

  assert!(output.status.success(), "stderr: {}", stderr_of(&output));
  assert!(stdout_of(&output).contains("0.9.1"));
  Ok(())
}
