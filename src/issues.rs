//! Issues and changes produced while synchronizing locale files.
//!
//! Nothing in the session prints. Every step returns an [`Outcome`] holding
//! the changes it made to disk and the issues it ran into; the CLI decides
//! how to show them.

use enum_dispatch::enum_dispatch;

use crate::core::KeyPath;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    EmptyNamespace,
    NamespaceConflict,
    MissingNamespace,
    FileError,
    MissingLocalesRoot,
    MissingSourceRoot,
    NamespaceNotObserved,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::EmptyNamespace => write!(f, "empty-namespace"),
            Rule::NamespaceConflict => write!(f, "namespace-conflict"),
            Rule::MissingNamespace => write!(f, "missing-namespace"),
            Rule::FileError => write!(f, "file-error"),
            Rule::MissingLocalesRoot => write!(f, "missing-locales-root"),
            Rule::MissingSourceRoot => write!(f, "missing-source-root"),
            Rule::NamespaceNotObserved => write!(f, "namespace-not-observed"),
        }
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A problem found while scanning sources or updating locale files.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    EmptyNamespace(EmptyNamespaceIssue),
    NamespaceConflict(NamespaceConflictIssue),
    MissingNamespace(MissingNamespaceIssue),
    FileError(FileErrorIssue),
    MissingLocalesRoot(MissingLocalesRootIssue),
    MissingSourceRoot(MissingSourceRootIssue),
    NamespaceNotObserved(NamespaceNotObservedIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }
}

// ============================================================
// Issue Types - Source Files
// ============================================================

/// `useTranslation("")`: probably meant the global namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyNamespaceIssue {
    pub file_path: String,
}

/// More than one distinct local namespace in a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceConflictIssue {
    pub file_path: String,
    pub namespaces: Vec<String>,
}

/// Local keys used without a local namespace declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingNamespaceIssue {
    pub file_path: String,
    pub keys: Vec<KeyPath>,
}

// ============================================================
// Issue Types - Filesystem
// ============================================================

/// A file could not be read, parsed or written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl FileErrorIssue {
    pub fn new(file_path: impl Into<String>, error: &anyhow::Error) -> Self {
        Self {
            file_path: file_path.into(),
            error: format!("{:#}", error),
        }
    }
}

/// The locales root does not exist, so there is nothing to reconcile against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingLocalesRootIssue {
    pub path: String,
}

/// The source root does not exist, so there is nothing to scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingSourceRootIssue {
    pub path: String,
}

/// Pruning skipped a namespace that no scanned file referred to.
///
/// This means "not seen in this run", which is not the same as "unused":
/// the file is left as it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceNotObservedIssue {
    pub file_path: String,
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Trait for issues that can be shown to the user.
#[enum_dispatch]
pub trait Report {
    /// Primary message.
    fn message(&self) -> String;

    /// File or directory the issue is about.
    fn path(&self) -> &str;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }
}

impl Report for EmptyNamespaceIssue {
    fn message(&self) -> String {
        "local namespace can not be empty".to_string()
    }

    fn path(&self) -> &str {
        &self.file_path
    }

    fn report_severity(&self) -> Severity {
        Severity::Error
    }

    fn report_rule(&self) -> Rule {
        Rule::EmptyNamespace
    }

    fn hint(&self) -> Option<&str> {
        Some("use `useTranslation()` for the global namespace")
    }
}

impl Report for NamespaceConflictIssue {
    fn message(&self) -> String {
        format!(
            "only one local namespace per file is supported, found: {}",
            self.namespaces.join(", ")
        )
    }

    fn path(&self) -> &str {
        &self.file_path
    }

    fn report_severity(&self) -> Severity {
        Severity::Error
    }

    fn report_rule(&self) -> Rule {
        Rule::NamespaceConflict
    }

    fn hint(&self) -> Option<&str> {
        Some("local keys in this file were not added to any namespace")
    }
}

impl Report for MissingNamespaceIssue {
    fn message(&self) -> String {
        let keys: Vec<String> = self.keys.iter().map(|k| k.to_string()).collect();
        format!(
            "found local translations without a local namespace: {}",
            keys.join(", ")
        )
    }

    fn path(&self) -> &str {
        &self.file_path
    }

    fn report_severity(&self) -> Severity {
        Severity::Error
    }

    fn report_rule(&self) -> Rule {
        Rule::MissingNamespace
    }

    fn hint(&self) -> Option<&str> {
        Some("use `tg(...)` for keys of the global namespace")
    }
}

impl Report for FileErrorIssue {
    fn message(&self) -> String {
        self.error.clone()
    }

    fn path(&self) -> &str {
        &self.file_path
    }

    fn report_severity(&self) -> Severity {
        Severity::Error
    }

    fn report_rule(&self) -> Rule {
        Rule::FileError
    }
}

impl Report for MissingLocalesRootIssue {
    fn message(&self) -> String {
        format!("{} does not exist, please create it", self.path)
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn report_severity(&self) -> Severity {
        Severity::Error
    }

    fn report_rule(&self) -> Rule {
        Rule::MissingLocalesRoot
    }
}

impl Report for MissingSourceRootIssue {
    fn message(&self) -> String {
        format!("source directory {} does not exist", self.path)
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn report_severity(&self) -> Severity {
        Severity::Error
    }

    fn report_rule(&self) -> Rule {
        Rule::MissingSourceRoot
    }
}

impl Report for NamespaceNotObservedIssue {
    fn message(&self) -> String {
        "no translations for this namespace were found in the source code".to_string()
    }

    fn path(&self) -> &str {
        &self.file_path
    }

    fn report_severity(&self) -> Severity {
        Severity::Warning
    }

    fn report_rule(&self) -> Rule {
        Rule::NamespaceNotObserved
    }

    fn hint(&self) -> Option<&str> {
        Some("file left untouched")
    }
}

// ============================================================
// Changes
// ============================================================

/// A modification made to the locale directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// A configured language directory was missing and has been created.
    LanguageCreated { language: String },
    /// A namespace seen in source for the first time; its files were created.
    NamespaceCreated { namespace: String },
    /// A namespace file present for another language was added to this one.
    FileCreated { file: String },
    /// A placeholder entry was written. `file` is e.g. `en/home.json`.
    KeyAdded { file: String, key: KeyPath },
    /// An entry not used in source was deleted.
    KeyRemoved { file: String, key: KeyPath },
}

// ============================================================
// Outcome
// ============================================================

/// Changes and issues produced by one step of a session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub changes: Vec<Change>,
    pub issues: Vec<Issue>,
}

impl Outcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn change(&mut self, change: Change) {
        self.changes.push(change);
    }

    pub fn issue(&mut self, issue: impl Into<Issue>) {
        self.issues.push(issue.into());
    }

    pub fn extend(&mut self, other: Outcome) {
        self.changes.extend(other.changes);
        self.issues.extend(other.issues);
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.issues.is_empty()
    }

    pub fn added_count(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c, Change::KeyAdded { .. }))
            .count()
    }

    pub fn removed_count(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| matches!(c, Change::KeyRemoved { .. }))
            .count()
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity() == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity() == Severity::Warning)
            .count()
    }
}
