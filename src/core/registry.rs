//! Known namespaces and the files backing them.

use std::{collections::BTreeSet, fs};

use crate::core::{
    Layout,
    store::{self, JsonDocument},
};
use crate::issues::{Change, FileErrorIssue, MissingLocalesRootIssue, Outcome};

/// The set of namespaces that exist as files in every language directory.
#[derive(Debug)]
pub struct NamespaceRegistry {
    layout: Layout,
    known: BTreeSet<String>,
    seeded: bool,
}

impl NamespaceRegistry {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            known: BTreeSet::new(),
            seeded: false,
        }
    }

    /// Load the namespaces already on disk and make all languages agree.
    ///
    /// Missing language directories are created. A namespace file present in
    /// one language but missing in another is created there as `{}`. If the
    /// locales root itself is missing nothing is touched and the registry
    /// stays unseeded.
    pub fn seed(&mut self) -> Outcome {
        let mut outcome = Outcome::new();
        let root = self.layout.locales_root();

        if !root.is_dir() {
            outcome.issue(MissingLocalesRootIssue {
                path: root.display().to_string(),
            });
            return outcome;
        }

        let mut per_language: Vec<(String, BTreeSet<String>)> = Vec::new();
        for language in self.layout.languages() {
            let dir = self.layout.language_dir(language);
            if !dir.is_dir() {
                if let Err(err) = fs::create_dir_all(&dir) {
                    outcome.issue(FileErrorIssue::new(
                        dir.display().to_string(),
                        &anyhow::Error::new(err).context("Failed to create language directory"),
                    ));
                    continue;
                }
                outcome.change(Change::LanguageCreated {
                    language: language.clone(),
                });
            }

            match store::json_files(&dir) {
                Ok(files) => {
                    let names: BTreeSet<String> = files
                        .iter()
                        .filter_map(|path| store::namespace_of(path))
                        .map(str::to_string)
                        .collect();
                    per_language.push((language.clone(), names));
                }
                Err(err) => {
                    outcome.issue(FileErrorIssue::new(dir.display().to_string(), &err));
                }
            }
        }

        for (_, names) in &per_language {
            self.known.extend(names.iter().cloned());
        }

        for (language, names) in &per_language {
            for namespace in self.known.difference(names) {
                let path = self.layout.namespace_file(language, namespace);
                match JsonDocument::empty(&path).save() {
                    Ok(()) => outcome.change(Change::FileCreated {
                        file: Layout::display_name(language, namespace),
                    }),
                    Err(err) => outcome.issue(FileErrorIssue::new(path.display().to_string(), &err)),
                }
            }
        }

        self.seeded = true;
        outcome
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    pub fn contains(&self, namespace: &str) -> bool {
        self.known.contains(namespace)
    }

    /// Known namespaces in sorted order.
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.known.iter().map(String::as_str)
    }

    /// Register `namespace`, creating an empty file for it in every language.
    ///
    /// Existing files are never overwritten. Known namespaces are a no-op.
    /// The namespace stays unknown if no language has a file for it afterwards.
    pub fn ensure(&mut self, namespace: &str) -> Outcome {
        let mut outcome = Outcome::new();
        if self.contains(namespace) {
            return outcome;
        }

        let mut backed = false;
        for language in self.layout.languages() {
            let path = self.layout.namespace_file(language, namespace);
            if path.exists() {
                backed = true;
                continue;
            }
            match JsonDocument::empty(&path).save() {
                Ok(()) => backed = true,
                Err(err) => outcome.issue(FileErrorIssue::new(path.display().to_string(), &err)),
            }
        }

        if !backed {
            return outcome;
        }
        self.known.insert(namespace.to_string());
        outcome.change(Change::NamespaceCreated {
            namespace: namespace.to_string(),
        });
        outcome
    }
}
