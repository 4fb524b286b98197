use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

/// Address of a translation entry inside a namespace file.
///
/// Translation entries are either flat (`"greeting": "Hello"`) or grouped one
/// level deep (`"label": { "save": "Save" }`):
///
/// - `KeyPath { key: "greeting", inner: None }` addresses the flat entry
/// - `KeyPath { key: "label", inner: Some("save") }` addresses the grouped one
///
/// The display form (`greeting`, `label.save`) doubles as the placeholder
/// value written for newly discovered keys.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeyPath {
    pub key: String,
    pub inner: Option<String>,
}

impl KeyPath {
    pub fn flat(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            inner: None,
        }
    }

    pub fn nested(key: impl Into<String>, inner: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            inner: Some(inner.into()),
        }
    }

    /// Value inserted for a key nobody has translated yet.
    pub fn placeholder(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(inner) => write!(f, "{}.{}", self.key, inner),
            None => write!(f, "{}", self.key),
        }
    }
}

/// Every key path seen in source during one session, grouped by namespace.
#[derive(Debug, Default, Clone)]
pub struct DiscoveredKeys {
    by_namespace: BTreeMap<String, BTreeSet<KeyPath>>,
}

impl DiscoveredKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record<'a>(&mut self, namespace: &str, keys: impl IntoIterator<Item = &'a KeyPath>) {
        let entry = self.by_namespace.entry(namespace.to_string()).or_default();
        entry.extend(keys.into_iter().cloned());
    }

    /// Keys seen for `namespace`, or `None` if the namespace was never observed.
    pub fn get(&self, namespace: &str) -> Option<&BTreeSet<KeyPath>> {
        self.by_namespace.get(namespace)
    }
}
