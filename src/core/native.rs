//! Native project version injection
//!
//! Pushes the version and build number into the platform project metadata
//! via `capacitor-set-version`. Each native directory is probed
//! independently; a Capacitor app may carry zero, one, or both.

use crate::core::error::ReleaseResult;
use crate::core::run::CommandRunner;
use crate::ui::logger::Logger;
use std::path::Path;

pub const ANDROID_DIR: &str = "android";
pub const IOS_DIR: &str = "ios";

/// Native platform selected for this invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
  Ios,
  Android,
}

impl Platform {
  pub fn as_str(&self) -> &'static str {
    match self {
      Platform::Ios => "ios",
      Platform::Android => "android",
    }
  }

  /// Name of the IDE `npx cap open` launches for this platform
  pub fn ide_name(&self) -> &'static str {
    match self {
      Platform::Ios => "Xcode",
      Platform::Android => "Android Studio",
    }
  }
}

/// Write version and build into every native project present under
/// `project_root`. Absent directories are skipped, not an error.
pub fn inject_all(
  runner: &dyn CommandRunner,
  logger: &Logger,
  project_root: &Path,
  version: &str,
  build: u64,
) -> ReleaseResult<()> {
  if project_root.join(ANDROID_DIR).is_dir() {
    inject(runner, logger, Platform::Android, version, build)?;
  }
  if project_root.join(IOS_DIR).is_dir() {
    inject(runner, logger, Platform::Ios, version, build)?;
  }
  Ok(())
}

fn inject(
  runner: &dyn CommandRunner,
  logger: &Logger,
  platform: Platform,
  version: &str,
  build: u64,
) -> ReleaseResult<()> {
  let action = format!("set:{}", platform.as_str());
  let build_arg = build.to_string();

  let output = runner.run_checked("capacitor-set-version", &[&action, "-v", version, "-b", &build_arg])?;
  logger.info(output.stdout.trim_end());

  Ok(())
}
