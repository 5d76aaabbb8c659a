//! Data model types for Pipfile deserialization.
//!
//! Only the package tables matter here: the set of names a user declared is
//! what decides which BUILD targets get generated. Version specifiers,
//! `[[source]]` entries, `[requires]`, and `[scripts]` are accepted but skipped.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use serde::de::IgnoredAny;

use crate::error::Error;
use crate::graph::PackageKey;

/// Top-level Pipfile structure.
#[derive(Debug, Default, Deserialize)]
pub struct Pipfile {
    /// Production dependencies.
    #[serde(default)]
    pub packages: BTreeMap<String, IgnoredAny>,

    /// Development dependencies.
    #[serde(rename = "dev-packages", default)]
    pub dev_packages: BTreeMap<String, IgnoredAny>,
}

impl Pipfile {
    /// Parse a Pipfile from the given path.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let content = fs_err::read_to_string(path)?;
        content.parse()
    }

    /// The packages declared in `[packages]` and `[dev-packages]`, lower-cased,
    /// deduplicated, and sorted.
    pub fn direct_dependencies(&self) -> Vec<PackageKey> {
        self.packages
            .keys()
            .chain(self.dev_packages.keys())
            .map(|name| PackageKey::new(name))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl FromStr for Pipfile {
    type Err = Error;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        toml::from_str(content).map_err(Error::Manifest)
    }
}
