use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Deserializer};

/// The normalized identifier of a package: its declared key, lower-cased.
///
/// Every lookup, deduplication, and ordering decision in the graph goes through
/// this type, so `SubDependency` and `subdependency` always refer to the same
/// package. Unlike PEP 503 normalization, underscores and dots are kept as-is;
/// the graph's own keys are already canonical apart from case.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackageKey(String);

impl PackageKey {
    /// Normalize a declared key.
    pub fn new(key: &str) -> Self {
        Self(key.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PackageKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl Borrow<str> for PackageKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PackageKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PackageKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let key = String::deserialize(deserializer)?;
        Ok(Self::new(&key))
    }
}
