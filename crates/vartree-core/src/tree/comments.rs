use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::tree::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
/// Flat annotation store keyed by the stringified path.
///
/// Comments live outside the nodes so annotation lifetime is not coupled to
/// node identity. Entries whose node disappears (should a removal operation
/// ever exist) stay behind as orphans; they are never pruned by guessing
/// intent.
pub struct CommentStore {
    entries: BTreeMap<String, String>,
}

impl CommentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or replace the comment at a path.
    pub fn set(&mut self, path: &Path, text: impl Into<String>) {
        self.entries.insert(path.to_string(), text.into());
    }

    /// Comment at a path, if any.
    pub fn get(&self, path: &Path) -> Option<&str> {
        self.entries.get(&path.to_string()).map(String::as_str)
    }

    /// Remove and return the comment at a path.
    pub fn remove(&mut self, path: &Path) -> Option<String> {
        self.entries.remove(&path.to_string())
    }

    /// Number of stored comments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no comment is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(key, text)` entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, text)| (key.as_str(), text.as_str()))
    }
}
