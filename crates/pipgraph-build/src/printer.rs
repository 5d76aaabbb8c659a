//! Output formatting for pipgraph-build commands.
//!
//! The [`Printer`] controls whether messages are emitted to stderr based on
//! the user's `--quiet` flag. Errors are always printed. Diagnostics below the
//! info level go through `tracing` instead (see [`crate::logging`]).

use anstream::eprintln;
use owo_colors::OwoColorize;

/// Controls output formatting for pipgraph-build commands.
#[derive(Copy, Clone)]
pub struct Printer {
    /// Whether output is suppressed.
    quiet: bool,
}

impl Printer {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Print an informational message to stderr.
    pub fn info(&self, message: &str) {
        if !self.quiet {
            eprintln!("{message}");
        }
    }

    /// Print a warning message to stderr.
    pub fn warn(&self, message: &str) {
        if !self.quiet {
            eprintln!("{}: {}", "warning".yellow().bold(), message);
        }
    }

    /// Print an error message to stderr, even in quiet mode.
    pub fn error(&self, message: &str) {
        eprintln!("{}: {}", "error".red().bold(), message);
    }
}
