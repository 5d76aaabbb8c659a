//! `pipgraph-build sort-graph`: rewrite a graph dump in canonical order.

use anyhow::{Context, Result};

use crate::cli::SortGraphArgs;
use crate::commands::ExitStatus;
use crate::printer::Printer;
use crate::sort::sort_graph;

/// Execute `pipgraph-build sort-graph`.
pub fn execute(args: &SortGraphArgs, printer: Printer) -> Result<ExitStatus> {
    let content = fs_err::read_to_string(&args.path)?;
    let sorted = sort_graph(&content)
        .with_context(|| format!("failed to sort {}", args.path.display()))?;
    fs_err::write(&args.path, sorted)?;
    printer.info(&format!("Sorted {}", args.path.display()));
    Ok(ExitStatus::Success)
}
