//! CLI argument definitions for pipgraph-build.
//!
//! All clap derive structs live here. The [`Cli`] struct is the top-level
//! parser; [`Commands`] enumerates every subcommand.

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};

use crate::pipfile::discovery::DEFAULT_MAX_DEPTH;

/// Clap v3-style help menu colors.
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// Generate Pants requirement targets from a pipenv dependency graph.
#[derive(Parser, Debug)]
#[command(
    name = "pipgraph-build",
    author,
    version,
    about = "Generate Pants requirement targets from a pipenv dependency graph.",
    styles = STYLES,
    after_help = "Use `pipgraph-build help <command>` for more information on a specific command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase logging verbosity.
    #[arg(global = true, short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors.
    #[arg(global = true, short, long)]
    pub quiet: bool,
}

/// Top-level subcommands for pipgraph-build.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a BUILD file with one requirement target per Pipfile package.
    Generate(GenerateArgs),

    /// Rewrite a dependency graph file in canonical order.
    SortGraph(SortGraphArgs),
}

impl Commands {
    /// Return the subcommand name as a static string (for diagnostics).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Generate(_) => "generate",
            Self::SortGraph(_) => "sort-graph",
        }
    }
}

/// Arguments for `pipgraph-build generate`.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Path to the Pipfile.
    ///
    /// If omitted, the nearest `Pipfile` in the current directory or one of
    /// its parents is used.
    #[arg(long, env = "PIPENV_PIPFILE", value_name = "PATH")]
    pub pipfile: Option<PathBuf>,

    /// Maximum number of parent directories to search for a Pipfile.
    #[arg(long, env = "PIPENV_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH, value_name = "N")]
    pub max_depth: usize,

    /// Path to the `pipenv graph --json` output [default: Pipfile.lock.graph next to the Pipfile].
    #[arg(long, env = "PIPGRAPH_GRAPH", value_name = "PATH")]
    pub graph: Option<PathBuf>,

    /// Where to write the generated targets [default: BUILD next to the Pipfile].
    #[arg(short, long, env = "PIPGRAPH_OUTPUT", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Don't write anything; fail if the output file is out of date.
    #[arg(long)]
    pub check: bool,
}

/// Arguments for `pipgraph-build sort-graph`.
#[derive(Parser, Debug)]
pub struct SortGraphArgs {
    /// The graph file to rewrite in place.
    #[arg(default_value = "Pipfile.lock.graph")]
    pub path: PathBuf,
}
