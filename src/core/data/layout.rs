use std::path::{Path, PathBuf};

/// On-disk arrangement of the locale files.
///
/// ```text
/// <locales_root>/
///   en/
///     translation.json
///     home.json
///   de/
///     translation.json
///     home.json
/// ```
#[derive(Debug, Clone)]
pub struct Layout {
    locales_root: PathBuf,
    languages: Vec<String>,
}

impl Layout {
    pub fn new(locales_root: impl Into<PathBuf>, languages: Vec<String>) -> Self {
        Self {
            locales_root: locales_root.into(),
            languages,
        }
    }

    pub fn locales_root(&self) -> &Path {
        &self.locales_root
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn language_dir(&self, language: &str) -> PathBuf {
        self.locales_root.join(language)
    }

    pub fn namespace_file(&self, language: &str, namespace: &str) -> PathBuf {
        self.language_dir(language).join(format!("{}.json", namespace))
    }

    /// Short name used in output, e.g. `en/home.json`.
    pub fn display_name(language: &str, namespace: &str) -> String {
        format!("{}/{}.json", language, namespace)
    }
}
