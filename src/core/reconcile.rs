//! Merging discovered keys into a namespace document.

use serde_json::{Map, Value};

use crate::core::KeyPath;

/// Add every missing key to `data`, using the key path as placeholder value.
///
/// Existing leaves are never touched. A grouped key whose outer entry holds
/// a non-object value replaces that value with an object first. Returns the
/// key paths that were added, in input order.
pub fn merge_keys<'a>(
    data: &mut Map<String, Value>,
    keys: impl IntoIterator<Item = &'a KeyPath>,
) -> Vec<KeyPath> {
    let mut added = Vec::new();

    for key_path in keys {
        match &key_path.inner {
            Some(inner) => {
                let group = data
                    .entry(key_path.key.clone())
                    .or_insert_with(|| Value::Object(Map::new()));
                if !group.is_object() {
                    *group = Value::Object(Map::new());
                }
                if let Value::Object(group) = group
                    && !group.contains_key(inner)
                {
                    group.insert(inner.clone(), Value::String(key_path.placeholder()));
                    added.push(key_path.clone());
                }
            }
            None => {
                if !data.contains_key(&key_path.key) {
                    data.insert(
                        key_path.key.clone(),
                        Value::String(key_path.placeholder()),
                    );
                    added.push(key_path.clone());
                }
            }
        }
    }

    added
}
