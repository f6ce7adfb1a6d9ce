//! The release command: the full sequential workflow
//!
//! States run strictly in order with no branching back:
//! precondition check, load record, prompt, compute the new record, web
//! build, native sync, native version injection, persist, open the IDE,
//! tag. The record is written only after injection succeeds, so a failure
//! anywhere earlier leaves the old record untouched and a crash after the
//! write never double-bumps on re-run.

use crate::core::error::{ReleaseError, ReleaseResult};
use crate::core::native::{self, Platform};
use crate::core::preconditions;
use crate::core::record::{RecordStore, ReleaseRecord};
use crate::core::run::CommandRunner;
use crate::core::version::BumpClass;
use crate::ui::logger::Logger;
use crate::ui::prompt::{Prompt, ReleaseDecisions};
use std::path::PathBuf;

/// Options resolved from the CLI
#[derive(Debug, Clone)]
pub struct ReleaseOptions {
  pub platform: Option<Platform>,
  pub force: bool,
  pub config: PathBuf,
  /// Preselected bump class; skips the version-type prompt
  pub bump: Option<BumpClass>,
  pub no_version: bool,
  pub no_build: bool,
  pub yes: bool,
}

/// Collaborators injected into the orchestrator
pub struct ReleaseContext<'a> {
  pub runner: &'a dyn CommandRunner,
  pub prompt: &'a dyn Prompt,
  pub logger: &'a Logger,
  pub project_root: PathBuf,
}

/// Run the release workflow end to end
pub fn run_release(opts: &ReleaseOptions, ctx: &ReleaseContext) -> ReleaseResult<()> {
  let platform = opts.platform.ok_or(ReleaseError::MissingPlatformTarget)?;

  preconditions::ensure_releasable(ctx.runner, ctx.prompt, ctx.logger, opts.force, opts.yes)?;

  let store = RecordStore::new(ctx.project_root.join(&opts.config));
  let record = store.load()?;

  let decisions = decide(ctx.prompt, opts)?;
  let next = next_record(&record, &decisions);

  ctx.logger.step("Building web assets");
  let output = ctx.runner.run_checked("npm", &["run", "build"])?;
  ctx.logger.info(output.stdout.trim_end());

  ctx.logger.step("Syncing web assets into native projects");
  let output = ctx.runner.run_checked("npx", &["cap", "sync"])?;
  ctx.logger.info(output.stdout.trim_end());

  ctx.logger.step("Updating native version and build");
  native::inject_all(ctx.runner, ctx.logger, &ctx.project_root, &next.version, next.build)?;

  // Point of no return: from here a re-run starts from the bumped record.
  store.save(&next)?;

  ctx.logger.step(&format!("Opening {}", platform.ide_name()));
  let output = ctx.runner.run_checked("npx", &["cap", "open", platform.as_str()])?;
  ctx.logger.info(output.stdout.trim_end());

  if decisions.bump_version {
    let tag = format!("v{}", next.version);
    ctx.logger.step(&format!("Tagging release as {}", tag));
    ctx.runner.run_checked("git", &["tag", &tag])?;
    ctx.logger.info(&format!("Push it when ready: git push origin {}", tag));
  }

  ctx.logger.success(&format!(
    "Release complete: version {} (build {})",
    next.version, next.build
  ));
  Ok(())
}

/// Collect the three release decisions, honoring non-interactive flags.
fn decide(prompt: &dyn Prompt, opts: &ReleaseOptions) -> ReleaseResult<ReleaseDecisions> {
  let bump_version = if opts.no_version {
    false
  } else if opts.yes || opts.bump.is_some() {
    true
  } else {
    prompt.confirm("Increase app version", true)?
  };

  let bump_class = if !bump_version {
    None
  } else if let Some(class) = opts.bump {
    Some(class)
  } else if opts.yes {
    return Err(ReleaseError::with_help(
      "--yes needs a preselected version type",
      "Add --bump <patch|minor|major>, or --no-version to keep the current version.",
    ));
  } else {
    Some(prompt.select_bump()?)
  };

  let bump_build = if opts.no_build {
    false
  } else if opts.yes {
    true
  } else {
    prompt.confirm("Increase build", true)?
  };

  Ok(ReleaseDecisions {
    bump_version,
    bump_class,
    bump_build,
  })
}

/// Derive the next record. The loaded record is never mutated.
fn next_record(record: &ReleaseRecord, decisions: &ReleaseDecisions) -> ReleaseRecord {
  let mut next = record.clone();

  if decisions.bump_version {
    if let Some(class) = decisions.bump_class {
      next.version = class.bump(&record.version).to_string();
    }
  }

  if decisions.bump_build {
    next.build = record.build + 1;
  }

  next
}
