//! Merge settings and their built-in defaults

use serde::{Deserialize, Serialize};

/// Attribute that tags a child with an explicit identity
pub const DEFAULT_IDENTITY_ATTRIBUTE: &str = "id";

/// How to resolve two siblings that share an identity key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateKeyPolicy {
    /// The later sibling shadows the earlier one
    #[default]
    LastWins,
    /// The earlier sibling is kept, later ones are ignored
    FirstWins,
}

/// Settings consulted by the merge engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeSettings {
    /// Attribute whose non-empty value overrides the node name as identity key
    pub identity_attribute: String,

    /// Collision handling within a single sibling list
    pub duplicate_keys: DuplicateKeyPolicy,
}

impl Default for MergeSettings {
    fn default() -> Self {
        Self {
            identity_attribute: DEFAULT_IDENTITY_ATTRIBUTE.to_string(),
            duplicate_keys: DuplicateKeyPolicy::LastWins,
        }
    }
}

impl MergeSettings {
    /// Use a different identity attribute
    pub fn with_identity_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.identity_attribute = attribute.into();
        self
    }

    /// Use a different duplicate key policy
    pub fn with_duplicate_keys(mut self, policy: DuplicateKeyPolicy) -> Self {
        self.duplicate_keys = policy;
        self
    }
}
