//! Colored operator-facing output
//!
//! The logger only classifies and prints; it never terminates the process.
//! Fatal decisions stay with the error types and the top-level handler.

use anstyle::{AnsiColor, Color, Style};

const STEP: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan)));
const WARN: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow)));
const ERROR: Style = Style::new()
  .bold()
  .fg_color(Some(Color::Ansi(AnsiColor::Red)));
const SUCCESS: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)));

pub struct Logger;

impl Logger {
  pub fn new() -> Self {
    Self
  }

  /// Plain informational output (command output echo, hints)
  pub fn info(&self, message: &str) {
    if !message.is_empty() {
      println!("{}", message);
    }
  }

  /// Stage banner for each step of the release sequence
  pub fn step(&self, message: &str) {
    println!("{}>>> {} ...{}", STEP.render(), message, STEP.render_reset());
  }

  pub fn warn(&self, message: &str) {
    println!("{}⚠️  {}{}", WARN.render(), message, WARN.render_reset());
  }

  #[allow(dead_code)] // fatal errors go through print_error; kept for non-fatal reporting
  pub fn error(&self, message: &str) {
    eprintln!("{}❌ {}{}", ERROR.render(), message, ERROR.render_reset());
  }

  pub fn success(&self, message: &str) {
    println!("{}✅ {}{}", SUCCESS.render(), message, SUCCESS.render_reset());
  }
}

impl Default for Logger {
  fn default() -> Self {
    Self::new()
  }
}
