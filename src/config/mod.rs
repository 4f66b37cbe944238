//! Configuration inheritance
//!
//! An inheriting configuration tree takes everything it does not set itself
//! from a single parent tree:
//! 1. Attributes and messages: current wins, gaps filled from parent
//! 2. Children matched by identity (`id` attribute, else name) merge recursively
//! 3. Parent-only children are appended in parent order

mod error;
mod identity;
mod merge;
mod node;
mod report;
mod settings;

pub use error::{ConfigError, EntryKind};
pub use identity::{identity_key, in_both, only_in_first, IdentityMap};
pub use merge::{merge_into, merge_into_with_settings, merge_with_parent, merge_with_parent_settings};
pub use node::ConfigNode;
pub use report::{InheritedEntry, MergeReport};
pub use settings::{DuplicateKeyPolicy, MergeSettings, DEFAULT_IDENTITY_ATTRIBUTE};
