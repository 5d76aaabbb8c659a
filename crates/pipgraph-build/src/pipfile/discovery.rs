//! Pipfile discovery: walk up directories to find the nearest `Pipfile`.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use tracing::trace;

/// Default maximum directory traversal depth, matching pipenv's `PIPENV_MAX_DEPTH`.
pub const DEFAULT_MAX_DEPTH: usize = 3;

/// The filename we're looking for.
const PIPFILE_NAME: &str = "Pipfile";

/// Discover the Pipfile by walking up from `start_dir`, visiting at most
/// `max_depth` parent directories.
pub fn find_pipfile(start_dir: &Path, max_depth: usize) -> Result<PathBuf> {
    let mut current = start_dir.to_path_buf();
    for _ in 0..=max_depth {
        let candidate = current.join(PIPFILE_NAME);
        trace!("Looking for {}", candidate.display());
        if candidate.is_file() {
            return Ok(candidate);
        }
        if !current.pop() {
            break;
        }
    }

    bail!(
        "No Pipfile found (searched up to {} parent directories from {})",
        max_depth,
        start_dir.display()
    );
}

/// Return the project root directory (parent of the Pipfile).
///
/// A bare `Pipfile` path has an empty parent, which is the current directory.
pub fn project_root(pipfile_path: &Path) -> &Path {
    pipfile_path.parent().unwrap_or_else(|| Path::new(""))
}
