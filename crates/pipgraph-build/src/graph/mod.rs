//! The in-memory dependency model built from a `pipenv graph --json` dump.
//!
//! Each record in the dump names a package and its direct children. A child may
//! be referenced before (or without ever) getting a record of its own, so the
//! reader first collects everything into a registry keyed by [`PackageKey`] and
//! only then freezes it into a [`DependencyGraph`].
//!
//! Children are stored as keys into the graph rather than as copies. There is
//! exactly one [`Dependency`] per key, and whatever its authoritative record says
//! is what every parent sees.

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;
use tracing::{debug, trace};

use crate::error::Error;

pub use key::PackageKey;

mod key;

/// A record in the graph dump: one package and the packages it requires directly.
#[derive(Debug, Deserialize)]
pub struct GraphRecord {
    pub package: PackageRecord,
    pub dependencies: Vec<ChildRecord>,
}

/// The package a [`GraphRecord`] describes. All fields are required.
#[derive(Debug, Deserialize)]
pub struct PackageRecord {
    pub key: PackageKey,
    pub package_name: String,
    pub installed_version: String,
}

/// A reference to a child package from within a [`GraphRecord`].
///
/// The name and version are optional: the child's own record, if there is one,
/// is the authoritative source for both.
#[derive(Debug, Deserialize)]
pub struct ChildRecord {
    pub key: PackageKey,
    pub package_name: Option<String>,
    pub installed_version: Option<String>,
}

/// A single installed package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// The lower-cased key, used for lookups and ordering.
    pub key: PackageKey,
    /// The display name as declared in the package metadata.
    pub package_name: String,
    /// The exact installed version.
    pub version: String,
    /// Direct children, sorted by key and free of duplicates.
    pub dependencies: Vec<PackageKey>,
}

impl Dependency {
    /// The `name==version` requirement for this package, addressed by key.
    pub fn pinned(&self) -> String {
        format!("{}=={}", self.key, self.version)
    }
}

/// The complete, immutable set of packages in a graph dump, ordered by key.
#[derive(Debug, Default)]
pub struct DependencyGraph {
    nodes: BTreeMap<PackageKey, Dependency>,
}

impl DependencyGraph {
    /// Parse a graph dump (a JSON array of [`GraphRecord`]s).
    pub fn from_json(content: &str) -> Result<Self, Error> {
        let records: Vec<GraphRecord> = serde_json::from_str(content).map_err(Error::Graph)?;
        Self::from_records(records)
    }

    /// Build the graph from already-deserialized records.
    ///
    /// When the same key has more than one record (for example, two casings of
    /// the same name), the last record's name and version win and the children
    /// of all records are merged.
    pub fn from_records(records: impl IntoIterator<Item = GraphRecord>) -> Result<Self, Error> {
        let mut registry = Registry::default();
        let mut count = 0usize;
        for record in records {
            registry.add(record);
            count += 1;
        }
        let graph = registry.finish()?;
        debug!(
            "Read {count} graph records covering {} packages",
            graph.len()
        );
        Ok(graph)
    }

    /// Look up a package by key. The key must already be normalized.
    pub fn get(&self, key: &str) -> Option<&Dependency> {
        self.nodes.get(key)
    }

    /// Resolve the direct children of `dependency` to their canonical nodes.
    pub fn children<'a>(
        &'a self,
        dependency: &'a Dependency,
    ) -> impl Iterator<Item = &'a Dependency> + 'a {
        dependency
            .dependencies
            .iter()
            .filter_map(|key| self.nodes.get(key))
    }

    /// Iterate over every package in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Dependency> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Look-up-or-create storage for packages while the dump is being read.
#[derive(Default)]
struct Registry {
    nodes: BTreeMap<PackageKey, PendingNode>,
}

#[derive(Default)]
struct PendingNode {
    package_name: Option<String>,
    version: Option<String>,
    /// Set once the package's own record has been read.
    declared: bool,
    dependencies: BTreeSet<PackageKey>,
}

impl Registry {
    fn node(&mut self, key: &PackageKey) -> &mut PendingNode {
        self.nodes.entry(key.clone()).or_default()
    }

    fn add(&mut self, record: GraphRecord) {
        let GraphRecord {
            package,
            dependencies,
        } = record;

        for child in dependencies {
            let node = self.node(&child.key);
            // Until the package's own record shows up, the first reference that
            // states a field keeps it.
            if !node.declared {
                if node.package_name.is_none() {
                    node.package_name = child.package_name;
                }
                if node.version.is_none() {
                    node.version = child.installed_version;
                }
            }
            self.node(&package.key).dependencies.insert(child.key);
        }

        trace!("Declared {} {}", package.key, package.installed_version);
        let node = self.node(&package.key);
        node.declared = true;
        node.package_name = Some(package.package_name);
        node.version = Some(package.installed_version);
    }

    fn finish(self) -> Result<DependencyGraph, Error> {
        let nodes = self
            .nodes
            .into_iter()
            .map(|(key, node)| {
                let Some(version) = node.version else {
                    return Err(Error::MissingVersion(key));
                };
                let package_name = node.package_name.unwrap_or_else(|| key.to_string());
                let dependency = Dependency {
                    key: key.clone(),
                    package_name,
                    version,
                    dependencies: node.dependencies.into_iter().collect(),
                };
                Ok((key, dependency))
            })
            .collect::<Result<_, _>>()?;
        Ok(DependencyGraph { nodes })
    }
}
