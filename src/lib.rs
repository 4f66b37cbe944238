//! Config Inherit - hierarchical configuration inheritance
//!
//! This crate merges a configuration tree with the parent tree it inherits
//! from. The current tree's own attributes, messages, and children take
//! precedence; anything it leaves unset is filled in from the parent.

pub mod config;

pub use config::{
    merge_into, merge_with_parent, ConfigError, ConfigNode, MergeReport, MergeSettings,
};
