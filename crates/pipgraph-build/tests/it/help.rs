use crate::common::{INSTA_FILTERS, pipgraph_help};
use crate::pipgraph_snapshot;

#[test]
fn help_shows_all_commands() {
    pipgraph_snapshot!(&INSTA_FILTERS, pipgraph_help(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Generate Pants requirement targets from a pipenv dependency graph.

    Usage: pipgraph-build [OPTIONS] <COMMAND>

    Commands:
      generate    Write a BUILD file with one requirement target per Pipfile package
      sort-graph  Rewrite a dependency graph file in canonical order
      help        Print this message or the help of the given subcommand(s)

    Options:
      -v, --verbose...  Increase logging verbosity
      -q, --quiet       Suppress all output except errors
      -h, --help        Print help
      -V, --version     Print version

    Use `pipgraph-build help <command>` for more information on a specific command.
    ----- stderr -----
    ");
}

#[test]
fn help_generate() {
    let mut cmd = crate::common::pipgraph_command();
    cmd.args(["help", "generate"]);

    let output = cmd.output().expect("Failed to execute pipgraph-build");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("--pipfile"));
    assert!(stdout.contains("--graph"));
    assert!(stdout.contains("--output"));
    assert!(stdout.contains("--check"));
    assert!(stdout.contains("PIPENV_PIPFILE"));
}

#[test]
fn unknown_command_errors() {
    let mut cmd = crate::common::pipgraph_command();
    cmd.arg("nonexistent");

    let output = cmd.output().expect("Failed to execute pipgraph-build");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn no_args_shows_help() {
    let mut cmd = crate::common::pipgraph_command();

    let output = cmd.output().expect("Failed to execute pipgraph-build");
    let stderr = String::from_utf8_lossy(&output.stderr);

    // clap errors with "requires a subcommand" when no subcommand given
    assert!(!output.status.success());
    assert!(
        stderr.contains("Usage") || stderr.contains("subcommand"),
        "Expected usage info in stderr, got: {stderr}"
    );
}
