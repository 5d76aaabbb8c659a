//! Pipfile parsing for pipgraph-build.
//!
//! The Pipfile is the manifest of directly-declared packages: every entry in
//! `[packages]` or `[dev-packages]` becomes one `python_requirement_library`
//! target in the generated BUILD file.

pub mod discovery;
pub mod model;

pub use discovery::{find_pipfile, project_root};
pub use model::Pipfile;
