//! Configuration tree node
//!
//! A node carries a name, keyed attributes and messages, and an ordered list
//! of owned children. An inheriting root may also hold a link to the parent
//! tree it inherits from; that tree is shared, never owned or mutated.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use super::error::{ConfigError, EntryKind};

/// One node of a configuration tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigNode {
    name: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    attributes: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    messages: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<ConfigNode>,

    #[serde(skip)]
    parent: Option<Arc<ConfigNode>>,
}

impl ConfigNode {
    /// Create an empty node
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Builder: set an attribute
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder: set a message
    pub fn with_message(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_message(key, value);
        self
    }

    /// Builder: append a child
    pub fn with_child(mut self, child: ConfigNode) -> Self {
        self.append_child(child);
        self
    }

    /// Builder: link the parent tree this node inherits from
    pub fn with_parent(mut self, parent: Arc<ConfigNode>) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute names in sorted order
    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Read an attribute, failing if it is absent
    pub fn attribute(&self, name: &str) -> Result<&str, ConfigError> {
        self.attributes
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| ConfigError::NotFound {
                kind: EntryKind::Attribute,
                key: name.to_string(),
            })
    }

    /// Insert an attribute, replacing any previous value.
    ///
    /// Precedence is the caller's concern; the merge engine only calls this
    /// for names the node does not yet have.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Insert an attribute, or append to an existing one as `old,new`
    pub fn add_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        self.attributes
            .entry(name.into())
            .and_modify(|current| {
                current.push(',');
                current.push_str(&value);
            })
            .or_insert_with(|| value.clone());
    }

    /// Message keys in sorted order
    pub fn message_keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    pub fn messages(&self) -> &BTreeMap<String, String> {
        &self.messages
    }

    pub fn has_message(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    /// Read a message, failing if it is absent
    pub fn message(&self, key: &str) -> Result<&str, ConfigError> {
        self.messages
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| ConfigError::NotFound {
                kind: EntryKind::Message,
                key: key.to_string(),
            })
    }

    /// Insert a message, replacing any previous value
    pub fn set_message(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.messages.insert(key.into(), value.into());
    }

    pub fn children(&self) -> &[ConfigNode] {
        &self.children
    }

    pub(crate) fn child_mut(&mut self, index: usize) -> Option<&mut ConfigNode> {
        self.children.get_mut(index)
    }

    /// Append a child at the end; no duplicate detection
    pub fn append_child(&mut self, child: ConfigNode) {
        self.children.push(child);
    }

    /// Remove and return the child at `index`
    pub fn remove_child(&mut self, index: usize) -> Option<ConfigNode> {
        if index < self.children.len() {
            Some(self.children.remove(index))
        } else {
            None
        }
    }

    /// The parent tree this node inherits from, if linked
    pub fn parent(&self) -> Option<&Arc<ConfigNode>> {
        self.parent.as_ref()
    }

    pub fn set_parent(&mut self, parent: Arc<ConfigNode>) {
        self.parent = Some(parent);
    }

    pub fn take_parent(&mut self) -> Option<Arc<ConfigNode>> {
        self.parent.take()
    }
}
