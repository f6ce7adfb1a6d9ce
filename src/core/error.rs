//! Error types for cap-release with contextual messages and exit codes
//!
//! Every failure path funnels into `ReleaseError`; the single top-level
//! handler in `main` prints the error and exits with the matching code.
//! Nothing below `main` terminates the process.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for cap-release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (bad flags, missing or malformed release record)
  User = 1,
  /// System error (failed external command, git, I/O)
  System = 2,
  /// Releasability check declined by the operator
  Validation = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for cap-release
#[derive(Debug)]
pub enum ReleaseError {
  /// Release record (config.json) errors
  Config(ConfigError),

  /// Git query or tag errors
  Git(GitError),

  /// An external command exited non-zero
  CommandFailed {
    command: String,
    stdout: String,
    stderr: String,
  },

  /// Operator declined the continue-anyway confirmation
  PreconditionBlocked,

  /// Neither --ios nor --android was given
  MissingPlatformTarget,

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl ReleaseError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    ReleaseError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Create an error with help text
  pub fn with_help(msg: impl Into<String>, help: impl Into<String>) -> Self {
    ReleaseError::Message {
      message: msg.into(),
      context: None,
      help: Some(help.into()),
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      ReleaseError::Message { message, context, help } => ReleaseError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      ReleaseError::Config(_) => ExitCode::User,
      ReleaseError::Git(_) => ExitCode::System,
      ReleaseError::CommandFailed { .. } => ExitCode::System,
      ReleaseError::PreconditionBlocked => ExitCode::Validation,
      ReleaseError::MissingPlatformTarget => ExitCode::User,
      ReleaseError::Io(_) => ExitCode::System,
      ReleaseError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      ReleaseError::Config(e) => e.help_message(),
      ReleaseError::Git(e) => e.help_message(),
      ReleaseError::PreconditionBlocked => {
        Some("Commit your changes and switch to the release branch, or re-run with --force.".to_string())
      }
      ReleaseError::MissingPlatformTarget => {
        Some("Pass --ios or --android to select the native project to open.".to_string())
      }
      ReleaseError::Message { help, .. } => help.clone(),
      _ => None,
    }
  }
}

impl fmt::Display for ReleaseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ReleaseError::Config(e) => write!(f, "{}", e),
      ReleaseError::Git(e) => write!(f, "{}", e),
      ReleaseError::CommandFailed { command, stdout, stderr } => {
        write!(f, "Command failed: {}", command)?;
        if !stdout.trim().is_empty() {
          write!(f, "\n--- stdout ---\n{}", stdout.trim_end())?;
        }
        if !stderr.trim().is_empty() {
          write!(f, "\n--- stderr ---\n{}", stderr.trim_end())?;
        }
        Ok(())
      }
      ReleaseError::PreconditionBlocked => {
        write!(f, "Release aborted: the repository is not in a releasable state")
      }
      ReleaseError::MissingPlatformTarget => {
        write!(f, "No platform target given")
      }
      ReleaseError::Io(e) => write!(f, "I/O error: {}", e),
      ReleaseError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for ReleaseError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      ReleaseError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for ReleaseError {
  fn from(err: io::Error) -> Self {
    ReleaseError::Io(err)
  }
}

impl From<String> for ReleaseError {
  fn from(msg: String) -> Self {
    ReleaseError::message(msg)
  }
}

impl From<&str> for ReleaseError {
  fn from(msg: &str) -> Self {
    ReleaseError::message(msg)
  }
}

impl From<serde_json::Error> for ReleaseError {
  fn from(err: serde_json::Error) -> Self {
    ReleaseError::message(format!("JSON error: {}", err))
  }
}

impl From<dialoguer::Error> for ReleaseError {
  fn from(err: dialoguer::Error) -> Self {
    ReleaseError::message(format!("Prompt failed: {}", err))
  }
}

/// Convert anyhow::Error to ReleaseError (for helper code that uses anyhow)
impl From<anyhow::Error> for ReleaseError {
  fn from(err: anyhow::Error) -> Self {
    ReleaseError::message(err.to_string())
  }
}

/// Release record errors
#[derive(Debug)]
pub enum ConfigError {
  /// Record file not found
  NotFound { path: PathBuf },

  /// Record file is not a valid JSON object
  Parse { path: PathBuf, message: String },

  /// Record file could not be written
  Write { path: PathBuf, message: String },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::NotFound { .. } => {
        Some("Pass --config <path> if the release record lives elsewhere.".to_string())
      }
      ConfigError::Parse { .. } => {
        Some("The record must be a JSON object with at least `version` and `build` fields.".to_string())
      }
      ConfigError::Write { .. } => None,
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::NotFound { path } => {
        write!(f, "Release record not found: {}", path.display())
      }
      ConfigError::Parse { path, message } => {
        write!(f, "Failed to parse release record {}: {}", path.display(), message)
      }
      ConfigError::Write { path, message } => {
        write!(f, "Failed to write release record {}: {}", path.display(), message)
      }
    }
  }
}

/// Git operation errors
#[derive(Debug)]
pub enum GitError {
  /// Git command failed
  CommandFailed { command: String, stderr: String },

  /// Repository not found at the current directory
  RepoNotFound { path: PathBuf },
}

impl GitError {
  fn help_message(&self) -> Option<String> {
    match self {
      GitError::RepoNotFound { path } => Some(format!(
        "Run the release from the repository root, or initialize one at: {}",
        path.display()
      )),
      _ => None,
    }
  }
}

impl fmt::Display for GitError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GitError::CommandFailed { command, stderr } => {
        write!(f, "Git command failed: {}\n{}", command, stderr)
      }
      GitError::RepoNotFound { path } => {
        write!(f, "Git repository not found at: {}", path.display())
      }
    }
  }
}

/// Result type alias for cap-release
pub type ReleaseResult<T> = Result<T, ReleaseError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context to an error result
  fn context(self, ctx: impl Into<String>) -> ReleaseResult<T>;

  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> ReleaseResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<ReleaseError>,
{
  fn context(self, ctx: impl Into<String>) -> ReleaseResult<T> {
    self.map_err(|e| e.into().context(ctx))
  }

  fn with_context<F>(self, f: F) -> ReleaseResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with colors and help text
pub fn print_error(error: &ReleaseError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
