//! Canonical ordering for graph dumps.
//!
//! `pipenv graph --json` emits records in installation order, which makes the
//! checked-in dump noisy to diff. Sorting records by package key and each
//! record's children by key gives a stable file. Fields this crate does not
//! read (such as `required_version`) are carried through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Error;

#[derive(Deserialize, Serialize)]
struct RawRecord {
    package: RawEntry,
    dependencies: Vec<RawEntry>,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

#[derive(Deserialize, Serialize)]
struct RawEntry {
    key: String,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

/// Sort a graph dump and pretty-print it with four-space indentation.
///
/// Keys are compared exactly as written, without case normalization.
pub fn sort_graph(content: &str) -> Result<String, Error> {
    let mut records: Vec<RawRecord> = serde_json::from_str(content).map_err(Error::Graph)?;

    records.sort_by(|a, b| a.package.key.cmp(&b.package.key));
    for record in &mut records {
        record.dependencies.sort_by(|a, b| a.key.cmp(&b.key));
    }

    let mut out = Vec::with_capacity(content.len());
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    records.serialize(&mut serializer).map_err(Error::Graph)?;
    out.push(b'\n');

    Ok(String::from_utf8(out).expect("serde_json writes UTF-8"))
}
