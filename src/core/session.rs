//! A reconciliation session: one run of the tool or one watch session.
//!
//! The session owns the namespace registry and the keys discovered so far.
//! It is driven from a single thread; each call completes, including its
//! file writes, before the next one starts.

use std::{fs, path::Path};

use anyhow::{Result, bail};

use crate::core::{
    DiscoveredKeys, KeyPath, Layout, NamespaceRegistry, SourceFilter,
    extract::{Extractor, PatternExtractor},
    prune::prune_document,
    reconcile::merge_keys,
    store::{self, JsonDocument},
    walk,
};
use crate::issues::{
    Change, EmptyNamespaceIssue, FileErrorIssue, MissingNamespaceIssue, MissingSourceRootIssue,
    NamespaceConflictIssue, NamespaceNotObservedIssue, Outcome,
};

pub struct Session<E: Extractor = PatternExtractor> {
    layout: Layout,
    global_namespace: String,
    extractor: E,
    registry: NamespaceRegistry,
    discovered: DiscoveredKeys,
    full_scan_done: bool,
}

impl Session<PatternExtractor> {
    pub fn new(layout: Layout, global_namespace: impl Into<String>) -> Self {
        Self::with_extractor(layout, global_namespace, PatternExtractor::new())
    }
}

impl<E: Extractor> Session<E> {
    pub fn with_extractor(layout: Layout, global_namespace: impl Into<String>, extractor: E) -> Self {
        Self {
            registry: NamespaceRegistry::new(layout.clone()),
            layout,
            global_namespace: global_namespace.into(),
            extractor,
            discovered: DiscoveredKeys::new(),
            full_scan_done: false,
        }
    }

    pub fn registry(&self) -> &NamespaceRegistry {
        &self.registry
    }

    /// True once [`Session::scan`] has walked an existing source root.
    pub fn full_scan_done(&self) -> bool {
        self.full_scan_done
    }

    /// Seed the registry from the locale directories.
    pub fn seed(&mut self) -> Outcome {
        self.registry.seed()
    }

    /// Scan every source file accepted by `filter`.
    ///
    /// `on_file` is called after each file with what processing it produced.
    /// Returns the issues of the walk itself; per-file outcomes are only
    /// passed to `on_file`. Completing a scan enables [`Session::prune`].
    pub fn scan<F>(&mut self, filter: &SourceFilter, mut on_file: F) -> Outcome
    where
        F: FnMut(&Path, &Outcome),
    {
        let mut outcome = Outcome::new();
        if !filter.root().is_dir() {
            outcome.issue(MissingSourceRootIssue {
                path: filter.root().display().to_string(),
            });
            return outcome;
        }

        let result = walk::source_files(filter);
        for path in &result.files {
            let file_outcome = self.process_file(path);
            on_file(path, &file_outcome);
        }

        if result.skipped_count > 0 {
            outcome.issue(FileErrorIssue {
                file_path: filter.root().display().to_string(),
                error: format!("{} entries could not be read", result.skipped_count),
            });
        }

        self.full_scan_done = true;
        outcome
    }

    /// Read one source file and reconcile what it uses.
    pub fn process_file(&mut self, path: &Path) -> Outcome {
        match fs::read_to_string(path) {
            Ok(content) => self.process_content(&path.display().to_string(), &content),
            Err(err) => {
                let mut outcome = Outcome::new();
                outcome.issue(FileErrorIssue::new(
                    path.display().to_string(),
                    &anyhow::Error::new(err).context("Failed to read source file"),
                ));
                outcome
            }
        }
    }

    /// Reconcile the translation usages found in `content`.
    ///
    /// `file_name` is only used for reporting.
    pub fn process_content(&mut self, file_name: &str, content: &str) -> Outcome {
        let facts = self.extractor.extract(content);
        let mut outcome = Outcome::new();

        if facts.uses_global && !self.registry.contains(&self.global_namespace) {
            let global = self.global_namespace.clone();
            outcome.extend(self.registry.ensure(&global));
        }

        if facts.has_empty_namespace() {
            outcome.issue(EmptyNamespaceIssue {
                file_path: file_name.to_string(),
            });
        }
        for namespace in facts.declared_namespaces() {
            outcome.extend(self.registry.ensure(namespace));
        }

        match facts.local_namespace() {
            Ok(Some(namespace)) => {
                if !facts.local_keys.is_empty() {
                    outcome.extend(self.reconcile(namespace, &facts.local_keys));
                }
            }
            Ok(None) => {
                if !facts.local_keys.is_empty() {
                    outcome.issue(MissingNamespaceIssue {
                        file_path: file_name.to_string(),
                        keys: facts.local_keys.clone(),
                    });
                }
            }
            Err(conflict) => {
                // Namespaces are already created; no keys of this file are used.
                outcome.issue(NamespaceConflictIssue {
                    file_path: file_name.to_string(),
                    namespaces: conflict.namespaces,
                });
                return outcome;
            }
        }

        if !facts.global_keys.is_empty() && self.registry.contains(&self.global_namespace) {
            let global = self.global_namespace.clone();
            outcome.extend(self.reconcile(&global, &facts.global_keys));
        }

        outcome
    }

    /// Record `keys` for `namespace` and add the missing ones to every language.
    pub fn reconcile(&mut self, namespace: &str, keys: &[KeyPath]) -> Outcome {
        self.discovered.record(namespace, keys);

        let mut outcome = Outcome::new();
        for language in self.layout.languages() {
            let path = self.layout.namespace_file(language, namespace);
            if !path.exists() {
                continue;
            }

            let mut document = match JsonDocument::open(&path) {
                Ok(document) => document,
                Err(err) => {
                    outcome.issue(FileErrorIssue::new(path.display().to_string(), &err));
                    continue;
                }
            };

            let added = merge_keys(document.data_mut(), keys);
            if added.is_empty() {
                continue;
            }
            if let Err(err) = document.save() {
                outcome.issue(FileErrorIssue::new(path.display().to_string(), &err));
                continue;
            }

            let file = Layout::display_name(language, namespace);
            outcome.changes.extend(added.into_iter().map(|key| Change::KeyAdded {
                file: file.clone(),
                key,
            }));
        }
        outcome
    }

    /// Rewrite every namespace file of every language in canonical form.
    pub fn normalize(&self) -> Outcome {
        let mut outcome = Outcome::new();
        for language in self.layout.languages() {
            let dir = self.layout.language_dir(language);
            let files = match store::json_files(&dir) {
                Ok(files) => files,
                Err(err) => {
                    outcome.issue(FileErrorIssue::new(dir.display().to_string(), &err));
                    continue;
                }
            };
            for path in files {
                if let Err(err) = store::normalize_file(&path) {
                    outcome.issue(FileErrorIssue::new(path.display().to_string(), &err));
                }
            }
        }
        outcome
    }

    /// Remove every entry that no scanned file uses.
    ///
    /// Only valid after a full scan in this session: with fewer files
    /// visited, keys used in unvisited files would be deleted. Namespaces
    /// without any discovered key are reported and left alone.
    pub fn prune(&self) -> Result<Outcome> {
        if !self.full_scan_done {
            bail!("Unused translations can only be removed after a full scan");
        }

        let mut outcome = Outcome::new();
        for language in self.layout.languages() {
            let dir = self.layout.language_dir(language);
            let files = match store::json_files(&dir) {
                Ok(files) => files,
                Err(err) => {
                    outcome.issue(FileErrorIssue::new(dir.display().to_string(), &err));
                    continue;
                }
            };

            for path in files {
                let Some(namespace) = store::namespace_of(&path) else {
                    continue;
                };
                let Some(discovered) = self.discovered.get(namespace) else {
                    outcome.issue(NamespaceNotObservedIssue {
                        file_path: path.display().to_string(),
                    });
                    continue;
                };

                let mut document = match JsonDocument::open(&path) {
                    Ok(document) => document,
                    Err(err) => {
                        outcome.issue(FileErrorIssue::new(path.display().to_string(), &err));
                        continue;
                    }
                };

                let pruned = prune_document(document.data_mut(), discovered);
                if pruned.is_empty() {
                    continue;
                }
                if let Err(err) = document.save() {
                    outcome.issue(FileErrorIssue::new(path.display().to_string(), &err));
                    continue;
                }

                let file = Layout::display_name(language, namespace);
                outcome.changes.extend(pruned.removed.into_iter().map(|key| {
                    Change::KeyRemoved {
                        file: file.clone(),
                        key,
                    }
                }));
            }
        }
        Ok(outcome)
    }
}
