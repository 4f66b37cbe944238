//! Parent-to-child configuration merge
//!
//! Fills gaps in the current tree from its parent tree, at every depth:
//! - Attributes: inherited when absent, current always wins
//! - Messages: same rule as attributes
//! - Children: parent-only children appended as-is, matched children merged
//!   recursively, current-only children untouched
//!
//! The parent tree is only ever borrowed immutably.

use tracing::{debug, trace, warn};

use super::error::ConfigError;
use super::identity::{identity_key, in_both, only_in_first, IdentityMap};
use super::node::ConfigNode;
use super::report::MergeReport;
use super::settings::MergeSettings;

/// Merge an inheriting root with the parent it links to.
///
/// Fails with [`ConfigError::MissingParent`] when no parent is linked.
pub fn merge_with_parent(root: &mut ConfigNode) -> Result<MergeReport, ConfigError> {
    merge_with_parent_settings(root, &MergeSettings::default())
}

/// [`merge_with_parent`] with explicit settings
pub fn merge_with_parent_settings(
    root: &mut ConfigNode,
    settings: &MergeSettings,
) -> Result<MergeReport, ConfigError> {
    let parent = root.parent().cloned().ok_or_else(|| ConfigError::MissingParent {
        name: root.name().to_string(),
    })?;
    Ok(merge_into_with_settings(&parent, root, settings))
}

/// Recursively merge `parent` into `current`, mutating `current` only
pub fn merge_into(parent: &ConfigNode, current: &mut ConfigNode) -> MergeReport {
    merge_into_with_settings(parent, current, &MergeSettings::default())
}

/// [`merge_into`] with explicit settings
pub fn merge_into_with_settings(
    parent: &ConfigNode,
    current: &mut ConfigNode,
    settings: &MergeSettings,
) -> MergeReport {
    debug!(
        current = current.name(),
        parent = parent.name(),
        "Merging parent configuration"
    );

    let path = identity_key(current, settings).to_string();
    let mut report = MergeReport::default();
    merge_node(parent, current, settings, &path, &mut report);

    debug!(
        attributes = report.attributes.len(),
        messages = report.messages.len(),
        children = report.children.len(),
        "Merged parent configuration"
    );
    report
}

fn merge_node(
    parent: &ConfigNode,
    current: &mut ConfigNode,
    settings: &MergeSettings,
    path: &str,
    report: &mut MergeReport,
) {
    merge_attributes(parent, current, path, report);
    merge_messages(parent, current, path, report);
    merge_children(parent, current, settings, path, report);
}

fn merge_attributes(
    parent: &ConfigNode,
    current: &mut ConfigNode,
    path: &str,
    report: &mut MergeReport,
) {
    for (name, value) in parent.attributes() {
        if !current.has_attribute(name) {
            current.set_attribute(name.as_str(), value.as_str());
            report.record_attribute(path, name);
        }
    }
}

fn merge_messages(
    parent: &ConfigNode,
    current: &mut ConfigNode,
    path: &str,
    report: &mut MergeReport,
) {
    for (key, value) in parent.messages() {
        if !current.has_message(key) {
            current.set_message(key.as_str(), value.as_str());
            report.record_message(path, key);
        }
    }
}

fn merge_children(
    parent: &ConfigNode,
    current: &mut ConfigNode,
    settings: &MergeSettings,
    path: &str,
    report: &mut MergeReport,
) {
    let parents = IdentityMap::build(parent.children(), settings);
    let currents = IdentityMap::build(current.children(), settings);

    for key in parents.duplicates() {
        warn!(path, key = key.as_str(), "Parent siblings share an identity key");
    }
    for key in currents.duplicates() {
        warn!(path, key = key.as_str(), "Current siblings share an identity key");
    }

    let added = only_in_first(&parents, &currents);
    let shared = in_both(&parents, &currents);

    // Walk the parent's own order so appended children keep it. Appends land
    // after every existing child, so indices in `currents` stay valid.
    for (index, child) in parent.children().iter().enumerate() {
        let key = identity_key(child, settings);
        if parents.index_of(key) != Some(index) {
            // shadowed by a sibling with the same key
            continue;
        }

        let child_path = format!("{path}/{key}");
        if added.contains(key) {
            trace!(path = child_path.as_str(), "Appending inherited child");
            current.append_child(child.clone());
            report.record_child(child_path);
        } else if shared.contains(key) {
            if let Some(target) = currents.index_of(key).and_then(|i| current.child_mut(i)) {
                trace!(path = child_path.as_str(), "Merging matched child");
                merge_node(child, target, settings, &child_path, report);
            }
        }
    }
}
