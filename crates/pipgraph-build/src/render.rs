//! Rendering of `python_requirement_library` targets for Pants.
//!
//! Each directly-declared package becomes one target whose requirements pin
//! the package itself and every package it transitively pulls in. The first
//! requirement is addressed by display name (it doubles as the target name);
//! the rest are addressed by key.

use std::collections::VecDeque;
use std::fmt;

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::error::Error;
use crate::graph::{Dependency, DependencyGraph, PackageKey};

/// A direct dependency together with everything reachable from it.
#[derive(Debug)]
pub struct Closure<'a> {
    pub root: &'a Dependency,
    /// Every package reachable from the root, excluding the root, sorted by key.
    pub descendants: Vec<&'a Dependency>,
}

impl<'a> Closure<'a> {
    /// Walk the graph breadth-first from `root`, visiting each package once.
    pub fn of(graph: &'a DependencyGraph, root: &PackageKey) -> Result<Self, Error> {
        let root = graph
            .get(root.as_str())
            .ok_or_else(|| Error::MissingDependency(root.clone()))?;

        let mut visited: FxHashSet<&PackageKey> = FxHashSet::default();
        visited.insert(&root.key);
        let mut descendants = Vec::new();
        let mut queue: VecDeque<&Dependency> = graph.children(root).collect();

        while let Some(dependency) = queue.pop_front() {
            if !visited.insert(&dependency.key) {
                continue;
            }
            descendants.push(dependency);
            queue.extend(
                graph
                    .children(dependency)
                    .filter(|child| !visited.contains(&child.key)),
            );
        }

        descendants.sort_unstable_by(|a, b| a.key.cmp(&b.key));
        debug!(
            "Closure of {} has {} transitive dependencies",
            root.key,
            descendants.len()
        );
        Ok(Self { root, descendants })
    }

    /// The pinned requirement strings: the root by display name, then each
    /// descendant by key.
    pub fn requirements(&self) -> impl Iterator<Item = String> + '_ {
        std::iter::once(format!(
            "{}=={}",
            self.root.package_name, self.root.version
        ))
        .chain(self.descendants.iter().map(|dependency| dependency.pinned()))
    }
}

impl fmt::Display for Closure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "python_requirement_library(")?;
        writeln!(f, "    name=\"{}\",", self.root.package_name)?;
        writeln!(f, "    requirements=[")?;
        for requirement in self.requirements() {
            writeln!(f, "        python_requirement(\"{requirement}\"),")?;
        }
        writeln!(f, "    ],")?;
        writeln!(f, ")")
    }
}

/// Render one target per direct dependency, in the given order, separated by a
/// blank line.
///
/// Fails if any direct dependency is missing from the graph; nothing is
/// rendered in that case.
pub fn render_targets(graph: &DependencyGraph, direct: &[PackageKey]) -> Result<String, Error> {
    let closures = direct
        .iter()
        .map(|key| Closure::of(graph, key))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(closures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}
