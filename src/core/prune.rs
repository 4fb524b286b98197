//! Removing entries that no source file refers to.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::core::KeyPath;

/// What [`prune_document`] removed.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Pruned {
    /// Entries absent from the discovered keys.
    pub removed: Vec<KeyPath>,
    /// Top-level groups dropped because they were left empty.
    pub emptied: Vec<String>,
}

impl Pruned {
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.emptied.is_empty()
    }
}

/// Entries of a namespace document as key paths.
///
/// Each member of an object value is a grouped entry. Any other value is a
/// flat entry.
pub fn entries(data: &Map<String, Value>) -> BTreeSet<KeyPath> {
    let mut entries = BTreeSet::new();
    for (key, value) in data {
        match value {
            Value::Object(group) => {
                entries.extend(group.keys().map(|inner| KeyPath::nested(key, inner)));
            }
            _ => {
                entries.insert(KeyPath::flat(key));
            }
        }
    }
    entries
}

/// Delete every entry not in `discovered`, then every empty top-level group.
pub fn prune_document(data: &mut Map<String, Value>, discovered: &BTreeSet<KeyPath>) -> Pruned {
    let mut pruned = Pruned::default();

    for key_path in entries(data).difference(discovered) {
        match &key_path.inner {
            Some(inner) => {
                if let Some(Value::Object(group)) = data.get_mut(&key_path.key) {
                    group.shift_remove(inner);
                }
            }
            None => {
                data.shift_remove(&key_path.key);
            }
        }
        pruned.removed.push(key_path.clone());
    }

    let empty_groups: Vec<String> = data
        .iter()
        .filter(|(_, value)| matches!(value, Value::Object(group) if group.is_empty()))
        .map(|(key, _)| key.clone())
        .collect();
    for key in empty_groups {
        data.shift_remove(&key);
        pruned.emptied.push(key);
    }

    pruned
}
