//! Interactive release decisions
//!
//! The prompt is a collaborator the orchestrator asks; it collects answers
//! and performs no mutation itself. Tests substitute a scripted
//! implementation.

use crate::core::error::ReleaseResult;
use crate::core::version::BumpClass;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Select};

/// The three operator decisions collected before a release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseDecisions {
  pub bump_version: bool,
  /// Only asked (and only meaningful) when `bump_version` is true
  pub bump_class: Option<BumpClass>,
  pub bump_build: bool,
}

/// Interactive question boundary
pub trait Prompt {
  fn confirm(&self, message: &str, default: bool) -> ReleaseResult<bool>;

  /// Choose the bump class. No default: the operator must pick.
  fn select_bump(&self) -> ReleaseResult<BumpClass>;
}

/// Prompts on the controlling terminal via dialoguer
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
  fn confirm(&self, message: &str, default: bool) -> ReleaseResult<bool> {
    let answer = Confirm::with_theme(&ColorfulTheme::default())
      .with_prompt(message)
      .default(default)
      .interact()?;
    Ok(answer)
  }

  fn select_bump(&self) -> ReleaseResult<BumpClass> {
    let choices = [
      "patch (x.x.1) - bug fixes",
      "minor (x.1.0) - new features",
      "major (1.0.0) - breaking changes",
    ];

    let index = Select::with_theme(&ColorfulTheme::default())
      .with_prompt("Version type")
      .items(&choices)
      .interact()?;

    Ok(match index {
      0 => BumpClass::Patch,
      1 => BumpClass::Minor,
      _ => BumpClass::Major,
    })
  }
}
