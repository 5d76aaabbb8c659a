//! `pipgraph-build generate`: write the BUILD file for a Pipfile.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::GenerateArgs;
use crate::commands::ExitStatus;
use crate::error::Error;
use crate::graph::DependencyGraph;
use crate::pipfile::{Pipfile, find_pipfile, project_root};
use crate::printer::Printer;
use crate::render::render_targets;

/// The first line of every generated file.
pub const HEADER: &str = "# Generated by pipgraph-build. See README for how to regenerate.";

/// Default graph file name, relative to the Pipfile.
pub const GRAPH_FILE_NAME: &str = "Pipfile.lock.graph";

/// Default output file name, relative to the Pipfile.
pub const BUILD_FILE_NAME: &str = "BUILD";

/// Produce the full BUILD file text from a Pipfile and a graph dump.
pub fn generate_build_file(pipfile: &str, graph: &str) -> Result<String, Error> {
    render_build_file(&pipfile.parse()?, graph)
}

/// Produce the full BUILD file text from an already-parsed Pipfile.
pub fn render_build_file(pipfile: &Pipfile, graph: &str) -> Result<String, Error> {
    let direct = pipfile.direct_dependencies();
    debug!("Pipfile declares {} packages", direct.len());
    let graph = DependencyGraph::from_json(graph)?;
    let targets = render_targets(&graph, &direct)?;
    Ok(format!("{HEADER}\n{targets}"))
}

/// Execute `pipgraph-build generate`.
pub fn execute(args: &GenerateArgs, printer: Printer) -> Result<ExitStatus> {
    let pipfile_path = match &args.pipfile {
        Some(path) => path.clone(),
        None => {
            let cwd = std::env::current_dir().context("failed to read the current directory")?;
            find_pipfile(&cwd, args.max_depth)?
        }
    };
    let root = project_root(&pipfile_path);
    let graph_path = args
        .graph
        .clone()
        .unwrap_or_else(|| root.join(GRAPH_FILE_NAME));
    let output_path: PathBuf = args
        .output
        .clone()
        .unwrap_or_else(|| root.join(BUILD_FILE_NAME));
    debug!(
        "Using Pipfile {}, graph {}, output {}",
        pipfile_path.display(),
        graph_path.display(),
        output_path.display()
    );

    let pipfile = Pipfile::from_path(&pipfile_path)
        .with_context(|| format!("failed to read {}", pipfile_path.display()))?;
    let graph = fs_err::read_to_string(&graph_path)?;
    let build = render_build_file(&pipfile, &graph).with_context(|| {
        format!(
            "failed to generate targets from {} and {}",
            pipfile_path.display(),
            graph_path.display()
        )
    })?;

    if args.check {
        let existing = match fs_err::read_to_string(&output_path) {
            Ok(existing) => Some(existing),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => return Err(err.into()),
        };
        if existing.as_deref() == Some(build.as_str()) {
            printer.info(&format!("{} is up to date.", output_path.display()));
            return Ok(ExitStatus::Success);
        }
        printer.warn(&format!(
            "{} is out of date. Run `pipgraph-build generate` to update it.",
            output_path.display()
        ));
        return Ok(ExitStatus::Failure);
    }

    fs_err::write(&output_path, &build)?;
    printer.info(&format!("Wrote {}", output_path.display()));
    Ok(ExitStatus::Success)
}
