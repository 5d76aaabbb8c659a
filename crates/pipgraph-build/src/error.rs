//! Error types for graph reading, manifest reading, and rendering.

use crate::graph::PackageKey;

/// An error raised while turning a Pipfile and a dependency graph into a BUILD file.
///
/// None of these are recoverable: a run either produces the complete output or
/// nothing at all.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The dependency graph is not valid JSON, or a record is missing a required field.
    #[error("failed to parse dependency graph")]
    Graph(#[source] serde_json::Error),

    /// The Pipfile is not valid TOML, or a section has the wrong shape.
    #[error("failed to parse Pipfile")]
    Manifest(#[source] toml::de::Error),

    /// A package is referenced in the graph, but no record states its installed version.
    #[error("package `{0}` has no installed version in the dependency graph")]
    MissingVersion(PackageKey),

    /// A package declared in the Pipfile does not appear in the dependency graph.
    #[error(
        "direct dependency `{0}` is missing from the dependency graph (is the graph out of date with the Pipfile?)"
    )]
    MissingDependency(PackageKey),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
