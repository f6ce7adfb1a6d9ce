//! Releasability checks against the git working tree
//!
//! Queries go through the injected `CommandRunner` so the policy can be
//! tested without a real repository. The check classifies and optionally
//! blocks; it never mutates anything, so calling it is always safe.

use crate::core::error::{GitError, ReleaseError, ReleaseResult};
use crate::core::run::CommandRunner;
use crate::ui::logger::Logger;
use crate::ui::prompt::Prompt;

/// Branch releases are expected to run from
pub const RELEASE_BRANCH: &str = "main";

/// Current branch name (`git rev-parse --abbrev-ref HEAD`)
pub fn current_branch(runner: &dyn CommandRunner) -> ReleaseResult<String> {
  let output = runner.run("git", &["rev-parse", "--abbrev-ref", "HEAD"])?;
  if !output.success() {
    if output.stderr.contains("not a git repository") {
      return Err(ReleaseError::Git(GitError::RepoNotFound {
        path: std::env::current_dir().unwrap_or_default(),
      }));
    }
    return Err(ReleaseError::Git(GitError::CommandFailed {
      command: "git rev-parse --abbrev-ref HEAD".to_string(),
      stderr: output.stderr,
    }));
  }
  Ok(output.stdout.trim().to_string())
}

/// Whether the working tree has no uncommitted changes
pub fn working_tree_clean(runner: &dyn CommandRunner) -> ReleaseResult<bool> {
  let output = runner.run("git", &["status", "--porcelain"])?;
  if !output.success() {
    return Err(ReleaseError::Git(GitError::CommandFailed {
      command: "git status --porcelain".to_string(),
      stderr: output.stderr,
    }));
  }
  Ok(output.stdout.trim().is_empty())
}

/// Decide whether the release may proceed.
///
/// Policy, in order: `force` skips every check; a clean tree on the release
/// branch proceeds silently; anything else surfaces both findings as
/// warnings and asks one continue-anyway confirmation. Declining blocks the
/// release before any side effect has happened.
pub fn ensure_releasable(
  runner: &dyn CommandRunner,
  prompt: &dyn Prompt,
  logger: &Logger,
  force: bool,
  assume_yes: bool,
) -> ReleaseResult<()> {
  if force {
    return Ok(());
  }

  let branch = current_branch(runner)?;
  let clean = working_tree_clean(runner)?;

  let wrong_branch = branch != RELEASE_BRANCH;
  let dirty = !clean;

  if !wrong_branch && !dirty {
    return Ok(());
  }

  if wrong_branch {
    logger.warn(&format!(
      "Current branch is '{}'; releases are expected from '{}'",
      branch, RELEASE_BRANCH
    ));
  }
  if dirty {
    logger.warn("Working tree has uncommitted changes");
  }

  if assume_yes {
    logger.warn("Continuing anyway (--yes)");
    return Ok(());
  }

  if prompt.confirm("Continue anyway?", false)? {
    Ok(())
  } else {
    Err(ReleaseError::PreconditionBlocked)
  }
}
