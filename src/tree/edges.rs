//! Edge relations and edge-file loaders
//!
//! An edge is a `(child, parent)` pair of entity names. Duplicate pairs
//! collapse because the relation is a set.

use crate::error::TragResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

/// A set of `(child, parent)` name pairs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeSet(BTreeSet<(String, String)>);

impl EdgeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(child, parent)` pairs
    pub fn from_pairs<I, C, P>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (C, P)>,
        C: Into<String>,
        P: Into<String>,
    {
        let mut edges = Self::new();
        for (child, parent) in pairs {
            edges.insert(child, parent);
        }
        edges
    }

    /// Add a `(child, parent)` pair; returns `false` if it was already present
    pub fn insert(&mut self, child: impl Into<String>, parent: impl Into<String>) -> bool {
        self.0.insert((child.into(), parent.into()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, String)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parent names that never appear as a child, sorted
    pub fn roots(&self) -> Vec<&str> {
        let children: BTreeSet<&str> = self.0.iter().map(|(c, _)| c.as_str()).collect();
        let parents: BTreeSet<&str> = self.0.iter().map(|(_, p)| p.as_str()).collect();
        parents.difference(&children).copied().collect()
    }

    /// Trim names and optionally lowercase them
    pub fn normalized(&self, lowercase: bool) -> Self {
        Self::from_pairs(
            self.0
                .iter()
                .map(|(c, p)| (normalize_name(c, lowercase), normalize_name(p, lowercase))),
        )
    }

    /// Parse `child,parent` CSV records
    ///
    /// Quoted fields may contain commas. Extra columns are ignored. Records
    /// with fewer than two columns or with an empty name are skipped.
    pub fn from_csv_reader<R: Read>(reader: R) -> TragResult<Self> {
        let mut rows = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut edges = Self::new();
        for record in rows.records() {
            let record = record?;
            match (record.get(0), record.get(1)) {
                (Some(child), Some(parent)) if !child.is_empty() && !parent.is_empty() => {
                    edges.insert(child, parent);
                }
                _ => {
                    let line = record.position().map(|p| p.line()).unwrap_or(0);
                    tracing::warn!(line, "skipping malformed edge row");
                }
            }
        }
        Ok(edges)
    }

    /// Parse a JSON array of `[child, parent]` pairs
    pub fn from_json_str(json: &str) -> TragResult<Self> {
        let pairs: Vec<(String, String)> = serde_json::from_str(json)?;
        Ok(Self::from_pairs(pairs))
    }

    /// Load an edge file; `.json` files are JSON, anything else is CSV
    pub fn load(path: impl AsRef<Path>) -> TragResult<Self> {
        let path = path.as_ref();
        let edges = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&std::fs::read_to_string(path)?)?,
            _ => Self::from_csv_reader(std::fs::File::open(path)?)?,
        };
        tracing::info!(path = %path.display(), edges = edges.len(), "loaded edges");
        Ok(edges)
    }
}

impl<C: Into<String>, P: Into<String>> FromIterator<(C, P)> for EdgeSet {
    fn from_iter<I: IntoIterator<Item = (C, P)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

/// Trim an entity name, lowercasing it when asked
pub fn normalize_name(name: &str, lowercase: bool) -> String {
    let trimmed = name.trim();
    if lowercase {
        trimmed.to_lowercase()
    } else {
        trimmed.to_string()
    }
}
