//! Integration tests for pipgraph-build.
//!
//! Following the single-integration-test pattern from:
//! <https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html>


mod help;
mod verbosity;
