//! Child identity resolution
//!
//! Children of two independently built trees correspond when their identity
//! keys are equal: the identity attribute (`id` by default) when it is set and
//! non-empty, otherwise the node name.

use std::collections::{BTreeSet, HashMap};

use super::node::ConfigNode;
use super::settings::{DuplicateKeyPolicy, MergeSettings};

/// Identity key of a node
pub fn identity_key<'a>(node: &'a ConfigNode, settings: &MergeSettings) -> &'a str {
    match node.attributes().get(&settings.identity_attribute) {
        Some(id) if !id.is_empty() => id.as_str(),
        _ => node.name(),
    }
}

/// Lookup from identity key to a position in a sibling list
#[derive(Debug, Clone, Default)]
pub struct IdentityMap {
    entries: HashMap<String, usize>,
    duplicates: Vec<String>,
}

impl IdentityMap {
    /// Index a sibling list by identity key.
    ///
    /// Colliding keys resolve according to `settings.duplicate_keys`; every
    /// collision is recorded in [`IdentityMap::duplicates`].
    pub fn build(nodes: &[ConfigNode], settings: &MergeSettings) -> Self {
        let mut map = Self::default();
        for (index, node) in nodes.iter().enumerate() {
            let key = identity_key(node, settings);
            match map.entries.get_mut(key) {
                Some(existing) => {
                    map.duplicates.push(key.to_string());
                    if settings.duplicate_keys == DuplicateKeyPolicy::LastWins {
                        *existing = index;
                    }
                }
                None => {
                    map.entries.insert(key.to_string(), index);
                }
            }
        }
        map
    }

    /// Position of the sibling resolved for `key`
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.entries.get(key).copied()
    }

    /// Resolve `key` to its node within `nodes`, the list this map was built from
    pub fn resolve<'a>(&self, nodes: &'a [ConfigNode], key: &str) -> Option<&'a ConfigNode> {
        self.index_of(key).and_then(|index| nodes.get(index))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys that appeared more than once while building
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }
}

/// Keys present in `first` but not in `second`
pub fn only_in_first<'a>(first: &'a IdentityMap, second: &IdentityMap) -> BTreeSet<&'a str> {
    first.keys().filter(|key| !second.contains(key)).collect()
}

/// Keys present in both maps
pub fn in_both<'a>(first: &'a IdentityMap, second: &IdentityMap) -> BTreeSet<&'a str> {
    first.keys().filter(|key| second.contains(key)).collect()
}
