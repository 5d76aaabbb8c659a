//! `tracing` setup for the binary.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the level chosen by `-v`/`-q`.
pub const LOG_ENV: &str = "PIPGRAPH_LOG";

/// Install a stderr subscriber: `warn` by default, `debug` with `-v`, `trace`
/// with `-vv`, and `error` with `--quiet`.
pub fn setup_logging(verbosity: u8, quiet: bool) {
    let default_level = match (quiet, verbosity) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "debug",
        (false, _) => "trace",
    };

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    // Only fails if a subscriber is already installed, e.g. by a test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
