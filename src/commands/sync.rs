//! The sync command: re-apply the recorded version and build
//!
//! Useful after a fresh checkout or when the native projects were
//! regenerated: reads the record and pushes the current values into
//! whichever native projects exist, with no bump, no build, no tag.

use crate::core::error::ReleaseResult;
use crate::core::native;
use crate::core::record::RecordStore;
use crate::core::run::CommandRunner;
use crate::ui::logger::Logger;
use std::path::{Path, PathBuf};

/// Options resolved from the CLI
#[derive(Debug, Clone)]
pub struct SyncOptions {
  pub config: PathBuf,
}

/// Run the version sync
pub fn run_sync(
  opts: &SyncOptions,
  runner: &dyn CommandRunner,
  logger: &Logger,
  project_root: &Path,
) -> ReleaseResult<()> {
  let store = RecordStore::new(project_root.join(&opts.config));
  let record = store.load()?;

  logger.step("Updating native version and build");
  native::inject_all(runner, logger, project_root, &record.version, record.build)?;

  logger.success(&format!(
    "Native projects now at version {} (build {})",
    record.version, record.build
  ));
  Ok(())
}
