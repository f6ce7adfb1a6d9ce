//! External command execution
//!
//! Every external process (npm, npx, capacitor-set-version, git) goes
//! through the `CommandRunner` trait so the orchestrator can be tested
//! against a scripted runner that records invocation order without
//! spawning anything.

use crate::core::error::{ReleaseError, ReleaseResult, ResultExt};
use std::io::Read;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Captured result of one external command
#[derive(Debug, Clone)]
pub struct CommandOutput {
  pub status: i32,
  pub stdout: String,
  pub stderr: String,
}

impl CommandOutput {
  pub fn success(&self) -> bool {
    self.status == 0
  }
}

/// Synchronous, blocking process execution boundary
pub trait CommandRunner {
  /// Run a command to completion and capture its output
  fn run(&self, program: &str, args: &[&str]) -> ReleaseResult<CommandOutput>;

  /// Run a command and convert a non-zero exit into `CommandFailed`
  /// carrying the captured stdout/stderr.
  fn run_checked(&self, program: &str, args: &[&str]) -> ReleaseResult<CommandOutput> {
    let output = self.run(program, args)?;
    if !output.success() {
      return Err(ReleaseError::CommandFailed {
        command: render_command(program, args),
        stdout: output.stdout,
        stderr: output.stderr,
      });
    }
    Ok(output)
  }
}

/// Render a command line for error messages and call recording
pub fn render_command(program: &str, args: &[&str]) -> String {
  let mut rendered = program.to_string();
  for arg in args {
    rendered.push(' ');
    rendered.push_str(arg);
  }
  rendered
}

/// Runs commands via the system shell environment
pub struct ShellRunner {
  timeout: Option<Duration>,
}

impl ShellRunner {
  pub fn new() -> Self {
    Self { timeout: None }
  }

  /// Optional per-command deadline. `None` waits indefinitely.
  pub fn with_timeout(timeout: Option<Duration>) -> Self {
    Self { timeout }
  }
}

impl Default for ShellRunner {
  fn default() -> Self {
    Self::new()
  }
}

impl CommandRunner for ShellRunner {
  fn run(&self, program: &str, args: &[&str]) -> ReleaseResult<CommandOutput> {
    match self.timeout {
      None => {
        let output = Command::new(program)
          .args(args)
          .stdin(Stdio::null())
          .output()
          .with_context(|| format!("Failed to spawn: {}", render_command(program, args)))?;

        Ok(CommandOutput {
          status: output.status.code().unwrap_or(-1),
          stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
          stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
      }
      Some(limit) => run_with_deadline(program, args, limit),
    }
  }
}

fn run_with_deadline(program: &str, args: &[&str], limit: Duration) -> ReleaseResult<CommandOutput> {
  let mut child = Command::new(program)
    .args(args)
    .stdin(Stdio::null())
    .stdout(Stdio::piped())
    .stderr(Stdio::piped())
    .spawn()
    .with_context(|| format!("Failed to spawn: {}", render_command(program, args)))?;

  // Drain pipes on background threads so a chatty child never blocks on a
  // full pipe buffer while we poll for exit.
  let stdout = drain(child.stdout.take());
  let stderr = drain(child.stderr.take());

  let start = Instant::now();
  let status = loop {
    if let Some(status) = child.try_wait()? {
      break status;
    }
    if start.elapsed() >= limit {
      let _ = child.kill();
      let _ = child.wait();
      return Err(ReleaseError::with_help(
        format!(
          "Command timed out after {}s: {}",
          limit.as_secs(),
          render_command(program, args)
        ),
        "Raise --timeout, or drop it to wait indefinitely.",
      ));
    }
    thread::sleep(Duration::from_millis(25));
  };

  Ok(CommandOutput {
    status: status.code().unwrap_or(-1),
    stdout: stdout.join().unwrap_or_default(),
    stderr: stderr.join().unwrap_or_default(),
  })
}

fn drain(pipe: Option<impl Read + Send + 'static>) -> thread::JoinHandle<String> {
  thread::spawn(move || {
    let mut bytes = Vec::new();
    if let Some(mut pipe) = pipe {
      let _ = pipe.read_to_end(&mut bytes);
    }
    String::from_utf8_lossy(&bytes).into_owned()
  })
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_render_command() {
    assert_eq!(render_command("npm", &["run", "build"]), "npm run build");
    assert_eq!(render_command("git", &[]), "git");
  }

  #[test]
  fn test_shell_runner_captures_output() {
    let runner = ShellRunner::new();
    let output = runner.run("echo", &["hello"]).unwrap();
    assert!(output.success());
    assert_eq!(output.stdout.trim(), "hello");
  }

  #[test]
  fn test_run_checked_converts_nonzero_exit() {
    let runner = ShellRunner::new();
    // `false` exits 1 with no output
    let err = runner.run_checked("false", &[]).unwrap_err();
    match err {
      ReleaseError::CommandFailed { command, .. } => assert_eq!(command, "false"),
      other => panic!("expected CommandFailed, got {:?}", other),
    }
  }

  #[test]
  fn test_deadline_kills_stuck_command() {
    let runner = ShellRunner::with_timeout(Some(Duration::from_millis(200)));
    let err = runner.run("sleep", &["5"]).unwrap_err();
    assert!(err.to_string().contains("timed out"));
  }

  #[test]
  fn test_deadline_passes_fast_command() {
    let runner = ShellRunner::with_timeout(Some(Duration::from_secs(10)));
    let output = runner.run("echo", &["quick"]).unwrap();
    assert!(output.success());
    assert_eq!(output.stdout.trim(), "quick");
  }
}
