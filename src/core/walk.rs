//! Finding the source files to scan.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::Pattern;
use walkdir::WalkDir;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths below the source root.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Decides which files under the source root are scanned.
///
/// Used both by the one-shot walk and by the watcher, so a file is either
/// picked up by both or by neither.
#[derive(Debug, Clone)]
pub struct SourceFilter {
    root: PathBuf,
    extensions: Vec<String>,
    literal_ignores: Vec<PathBuf>,
    glob_ignores: Vec<Pattern>,
}

impl SourceFilter {
    pub fn new(root: impl Into<PathBuf>, extensions: &[String], ignores: &[String]) -> Result<Self> {
        let root = root.into();
        let mut literal_ignores = Vec::new();
        let mut glob_ignores = Vec::new();

        for ignore in ignores {
            if is_glob_pattern(ignore) {
                glob_ignores.push(
                    Pattern::new(ignore)
                        .with_context(|| format!("Invalid ignore pattern: \"{}\"", ignore))?,
                );
            } else {
                literal_ignores.push(root.join(ignore));
            }
        }

        Ok(Self {
            root,
            extensions: extensions.to_vec(),
            literal_ignores,
            glob_ignores,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn has_source_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    pub fn is_ignored(&self, path: &Path) -> bool {
        if self
            .literal_ignores
            .iter()
            .any(|ignore_path| path.starts_with(ignore_path))
        {
            return true;
        }
        let path_str = path.to_string_lossy();
        self.glob_ignores.iter().any(|p| p.matches(&path_str))
    }

    /// True if `path` has a recognized extension and is not ignored.
    pub fn accepts(&self, path: &Path) -> bool {
        self.has_source_extension(path) && !self.is_ignored(path)
    }
}

/// Result of walking the source root.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Accepted files in traversal order (sorted by file name per directory).
    pub files: Vec<PathBuf>,
    /// Entries that could not be read.
    pub skipped_count: usize,
}

/// Recursively list every accepted file under the filter's root.
pub fn source_files(filter: &SourceFilter) -> ScanResult {
    let mut result = ScanResult::default();

    for entry in WalkDir::new(filter.root()).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => {
                result.skipped_count += 1;
                continue;
            }
        };

        let path = entry.path();
        if entry.file_type().is_file() && filter.accepts(path) {
            result.files.push(path.to_path_buf());
        }
    }

    result
}
