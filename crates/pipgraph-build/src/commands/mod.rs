//! Command dispatch for pipgraph-build.

use std::process::ExitCode;

use anyhow::Result;
use tracing::debug;

use crate::cli;
use crate::printer::Printer;

pub mod generate;
pub mod sort_graph;

/// Exit status for pipgraph-build commands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The command succeeded.
    Success,

    /// The command ran, but the check it performed did not pass.
    Failure,

    /// The command failed with an error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => Self::from(0),
            ExitStatus::Failure => Self::from(1),
            ExitStatus::Error => Self::from(2),
        }
    }
}

/// Dispatch a parsed CLI command to the appropriate handler.
pub fn dispatch(command: cli::Commands, printer: Printer) -> Result<ExitStatus> {
    debug!("Running `{}`", command.name());
    match command {
        cli::Commands::Generate(args) => generate::execute(&args, printer),
        cli::Commands::SortGraph(args) => sort_graph::execute(&args, printer),
    }
}
