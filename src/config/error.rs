//! Configuration tree errors

use serde::{Deserialize, Serialize};

/// Which keyed mapping of a node an entry lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Attribute,
    Message,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::Attribute => write!(f, "attribute"),
            EntryKind::Message => write!(f, "message"),
        }
    }
}

/// Configuration errors
///
/// None of these are retryable: the merge is deterministic in its inputs.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("No {kind} named '{key}'")]
    NotFound { kind: EntryKind, key: String },

    #[error("Configuration '{name}' has no parent to inherit from")]
    MissingParent { name: String },
}
