//! Extraction: turns the text of one source file into translation facts.
//!
//! Extraction is pure. It reads nothing but the given text and reports what
//! it found; deciding what to do with empty or conflicting namespaces is left
//! to the session.

mod patterns;

pub use patterns::PatternExtractor;

use crate::core::KeyPath;

/// A strategy for finding translation lookups in source text.
pub trait Extractor {
    fn extract(&self, content: &str) -> FileFacts;
}

/// Everything an extractor found in one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileFacts {
    /// The file declares the global namespace (`useTranslation()`).
    pub uses_global: bool,
    /// Local namespace declarations in order of appearance, possibly empty strings.
    pub local_namespaces: Vec<String>,
    /// Keys looked up through the local translation function.
    pub local_keys: Vec<KeyPath>,
    /// Keys looked up through the global translation function.
    pub global_keys: Vec<KeyPath>,
}

/// A file declares more than one distinct local namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceConflict {
    pub namespaces: Vec<String>,
}

impl FileFacts {
    /// True if any local namespace declaration is the empty string.
    pub fn has_empty_namespace(&self) -> bool {
        self.local_namespaces.iter().any(|ns| ns.is_empty())
    }

    /// Non-empty local namespace declarations, deduplicated, in order of appearance.
    pub fn declared_namespaces(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for ns in &self.local_namespaces {
            if !ns.is_empty() && !seen.contains(&ns.as_str()) {
                seen.push(ns);
            }
        }
        seen
    }

    /// The single local namespace of this file.
    ///
    /// Repeated identical declarations collapse into one. Declarations of
    /// different namespaces are a conflict, and the caller must not attribute
    /// local keys to any of them.
    pub fn local_namespace(&self) -> Result<Option<&str>, NamespaceConflict> {
        let declared = self.declared_namespaces();
        match declared.as_slice() {
            [] => Ok(None),
            [single] => Ok(Some(*single)),
            _ => Err(NamespaceConflict {
                namespaces: declared.iter().map(|ns| ns.to_string()).collect(),
            }),
        }
    }
}
