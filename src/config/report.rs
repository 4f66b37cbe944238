//! Provenance of a merge
//!
//! Records every value the current tree inherited from its parent, keyed by
//! the node path it landed on.

use serde::{Deserialize, Serialize};

/// A single attribute or message copied from the parent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InheritedEntry {
    /// `/`-joined identity keys from the root to the receiving node
    pub path: String,

    /// Attribute name or message key
    pub key: String,
}

/// What a merge changed in the current tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeReport {
    /// Attributes filled in from the parent
    pub attributes: Vec<InheritedEntry>,

    /// Messages filled in from the parent
    pub messages: Vec<InheritedEntry>,

    /// Paths of parent-only subtrees appended to the current tree
    pub children: Vec<String>,
}

impl MergeReport {
    /// True when the merge left the current tree untouched
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.messages.is_empty() && self.children.is_empty()
    }

    /// Number of inherited entries of all kinds
    pub fn total(&self) -> usize {
        self.attributes.len() + self.messages.len() + self.children.len()
    }

    pub(crate) fn record_attribute(&mut self, path: &str, key: &str) {
        self.attributes.push(InheritedEntry {
            path: path.to_string(),
            key: key.to_string(),
        });
    }

    pub(crate) fn record_message(&mut self, path: &str, key: &str) {
        self.messages.push(InheritedEntry {
            path: path.to_string(),
            key: key.to_string(),
        });
    }

    pub(crate) fn record_child(&mut self, path: String) {
        self.children.push(path);
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
