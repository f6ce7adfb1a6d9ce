mod commands;
mod core;
mod ui;

use clap::{Parser, Subcommand};
use crate::commands::{ReleaseContext, ReleaseOptions, SyncOptions};
use crate::core::error::{ReleaseError, ReleaseResult, ResultExt, print_error};
use crate::core::native::Platform;
use crate::core::record::DEFAULT_RECORD_PATH;
use crate::core::run::ShellRunner;
use crate::core::version::BumpClass;
use crate::ui::Logger;
use crate::ui::prompt::TerminalPrompt;
use std::path::PathBuf;
use std::time::Duration;

/// Release automation for Capacitor mobile apps
#[derive(Parser)]
#[command(name = "cap-release")]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Run the full release workflow: checks, version bump, build, native
  /// sync, IDE, git tag
  Release {
    /// Target the iOS native project
    #[arg(long, conflicts_with = "android")]
    ios: bool,

    /// Target the Android native project
    #[arg(long)]
    android: bool,

    /// Skip branch and working-tree checks
    #[arg(short, long)]
    force: bool,

    /// Path to the release record
    #[arg(long, default_value = DEFAULT_RECORD_PATH)]
    config: PathBuf,

    /// Preselect the version bump type (skips that prompt)
    #[arg(long, value_enum)]
    bump: Option<BumpClass>,

    /// Keep the current app version
    #[arg(long, conflicts_with = "bump")]
    no_version: bool,

    /// Keep the current build number
    #[arg(long)]
    no_build: bool,

    /// Answer yes to every confirmation (non-interactive; needs --bump
    /// unless --no-version is given)
    #[arg(short = 'y', long)]
    yes: bool,

    /// Per-command timeout in seconds (default: wait indefinitely)
    #[arg(long)]
    timeout: Option<u64>,
  },

  /// Re-apply the recorded version and build to the native projects
  Sync {
    /// Path to the release record
    #[arg(long, default_value = DEFAULT_RECORD_PATH)]
    config: PathBuf,
  },
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = Cli::parse();

  if let Err(err) = dispatch(cli) {
    handle_error(err);
  }
}

fn dispatch(cli: Cli) -> ReleaseResult<()> {
  let logger = Logger::new();
  let project_root = std::env::current_dir().context("Failed to resolve the current directory")?;

  match cli.command {
    Commands::Release {
      ios,
      android,
      force,
      config,
      bump,
      no_version,
      no_build,
      yes,
      timeout,
    } => {
      let platform = match (ios, android) {
        (true, _) => Some(Platform::Ios),
        (_, true) => Some(Platform::Android),
        _ => None,
      };

      let runner = ShellRunner::with_timeout(timeout.map(Duration::from_secs));
      let prompt = TerminalPrompt;

      let opts = ReleaseOptions {
        platform,
        force,
        config,
        bump,
        no_version,
        no_build,
        yes,
      };
      let ctx = ReleaseContext {
        runner: &runner,
        prompt: &prompt,
        logger: &logger,
        project_root,
      };

      commands::run_release(&opts, &ctx)
    }

    Commands::Sync { config } => {
      let runner = ShellRunner::new();
      let opts = SyncOptions { config };
      commands::run_sync(&opts, &runner, &logger, &project_root)
    }
  }
}

fn handle_error(err: ReleaseError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code().as_i32());
}
