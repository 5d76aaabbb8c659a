//! pipgraph-build: turn a pipenv dependency graph into Pants requirement targets.
//!
//! The library reads `pipenv graph --json` output into a [`DependencyGraph`],
//! reads the directly-declared packages from a [`Pipfile`], and renders one
//! `python_requirement_library` per declared package listing its full
//! transitive closure with pinned versions. [`main`] is the CLI entry point.

#![deny(clippy::print_stdout, clippy::print_stderr)]

use std::ffi::OsString;
use std::process::ExitCode;

use anstream::eprintln;
use clap::Parser;
use owo_colors::OwoColorize;

use crate::cli::Cli;
use crate::commands::ExitStatus;
use crate::printer::Printer;

pub use crate::commands::generate::{generate_build_file, render_build_file};
pub use crate::error::Error;
pub use crate::graph::{Dependency, DependencyGraph, PackageKey};
pub use crate::pipfile::Pipfile;
pub use crate::render::{Closure, render_targets};
pub use crate::sort::sort_graph;

pub mod cli;
pub mod commands;
mod error;
pub mod graph;
pub mod logging;
pub mod pipfile;
pub mod printer;
pub mod render;
pub mod sort;

/// Entry point for the pipgraph-build CLI.
///
/// Parses CLI arguments, installs the tracing subscriber, and dispatches to the
/// appropriate command handler.
pub fn main<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => err.exit(),
    };

    logging::setup_logging(cli.verbose, cli.quiet);
    let printer = Printer::new(cli.quiet);

    match commands::dispatch(cli.command, printer) {
        Ok(status) => status.into(),
        Err(err) => {
            let mut causes = err.chain();
            // An anyhow::Error always has at least one cause (itself).
            printer.error(
                &causes
                    .next()
                    .expect("error chain is never empty")
                    .to_string(),
            );
            for cause in causes {
                eprintln!(
                    "  {}: {}",
                    "Caused by".red().bold(),
                    cause.to_string().trim()
                );
            }
            ExitStatus::Error.into()
        }
    }
}
