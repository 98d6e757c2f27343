//! Logical asset ids resolved to relative file paths.
//!
//! Content, not logic: the catalog is a pure lookup table the scenes and
//! the page share. A missing id falls back to `./<id>.png` so a broken
//! mapping degrades to a predictable path instead of an error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One image asset: a logical id, its file name, and a human label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetEntry {
    pub id: String,
    pub filename: String,
    #[serde(default)]
    pub label: String,
}

/// Lookup table from logical id to relative path.
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    entries: Vec<AssetEntry>,
    by_id: HashMap<String, usize>,
}

impl AssetCatalog {
    pub fn new(entries: Vec<AssetEntry>) -> Self {
        let by_id = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.id.clone(), i))
            .collect();
        Self { entries, by_id }
    }

    /// Parse a catalog from JSON (an array of entries).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<AssetEntry> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    /// Serialize the entry list to JSON for the page.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.entries).unwrap_or_else(|_| "[]".into())
    }

    pub fn get(&self, id: &str) -> Option<&AssetEntry> {
        self.by_id.get(id).map(|&i| &self.entries[i])
    }

    /// Relative path for `id`; unknown ids yield `./<id>.png`.
    pub fn path_for(&self, id: &str) -> String {
        match self.get(id) {
            Some(entry) => format!("./{}", entry.filename),
            None => format!("./{id}.png"),
        }
    }

    pub fn label_for(&self, id: &str) -> Option<&str> {
        self.get(id).map(|e| e.label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssetEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
