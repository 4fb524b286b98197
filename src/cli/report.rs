//! Console output.
//!
//! Every change and issue is printed as soon as the step that produced it
//! finishes, so long runs and watch sessions show progress as they go.

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use colored::Colorize;

use crate::config::Settings;
use crate::issues::{Change, Issue, Outcome, Report, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Running totals for the final summary.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub files: usize,
    pub added: usize,
    pub removed: usize,
    pub errors: usize,
    pub warnings: usize,
}

pub struct Reporter<W: Write> {
    writer: W,
    verbose: bool,
    base_dir: Option<PathBuf>,
    totals: Totals,
}

impl Reporter<io::Stdout> {
    pub fn stdout(verbose: bool) -> Self {
        Self::new(io::stdout(), verbose)
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(writer: W, verbose: bool) -> Self {
        Self {
            writer,
            verbose,
            base_dir: None,
            totals: Totals::default(),
        }
    }

    /// Print paths below `base_dir` relative to it.
    pub fn with_base_dir(mut self, base_dir: &Path) -> Self {
        self.base_dir = Some(base_dir.to_path_buf());
        self
    }

    pub fn totals(&self) -> Totals {
        self.totals
    }

    pub fn banner(&mut self, settings: &Settings) {
        let source = self.display_path(&settings.source_root.display().to_string());
        let locales = self.display_path(&settings.locales_root.display().to_string());
        let _ = writeln!(self.writer, "Starting translation scanner...");
        let _ = writeln!(self.writer, "Scanning source directory: {}", source);
        let _ = writeln!(self.writer, "Creating translation files in: {}", locales);
        let _ = writeln!(
            self.writer,
            "Languages: {}",
            settings.languages.join(", ")
        );
    }

    /// Report one processed source file.
    pub fn file(&mut self, path: &Path, outcome: &Outcome) {
        self.totals.files += 1;
        if self.verbose {
            let path = self.display_path(&path.display().to_string());
            let _ = writeln!(self.writer, "{} {}", "scan:".dimmed(), path);
        }
        self.outcome(outcome);
    }

    pub fn outcome(&mut self, outcome: &Outcome) {
        for change in &outcome.changes {
            self.change(change);
        }
        for issue in &outcome.issues {
            self.issue(issue);
        }
    }

    pub fn watching(&mut self, source_root: &Path) {
        let source = self.display_path(&source_root.display().to_string());
        let _ = writeln!(self.writer, "Watching for changes in {}...", source);
        let _ = writeln!(self.writer, "Press {} to stop", "Ctrl+C".cyan());
    }

    pub fn stopped_watching(&mut self) {
        let _ = writeln!(self.writer, "Stopped watching");
    }

    pub fn summary(&mut self) {
        let Totals {
            files,
            added,
            removed,
            errors,
            warnings,
        } = self.totals;

        let scanned = format!(
            "Scanned {} source {}: {} added, {} removed",
            files,
            if files == 1 { "file" } else { "files" },
            added,
            removed
        );

        if errors + warnings == 0 {
            let _ = writeln!(self.writer, "{} {}", SUCCESS_MARK.green(), scanned.green());
        } else {
            let _ = writeln!(
                self.writer,
                "{} {} ({} {}, {} {})",
                FAILURE_MARK.red(),
                scanned,
                errors,
                if errors == 1 { "error" } else { "errors" }.red(),
                warnings,
                if warnings == 1 { "warning" } else { "warnings" }.yellow()
            );
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn change(&mut self, change: &Change) {
        let _ = match change {
            Change::LanguageCreated { language } => {
                writeln!(self.writer, "{} {}", "create language:".blue(), language)
            }
            Change::NamespaceCreated { namespace } => {
                writeln!(self.writer, "{} {}", "create namespace:".blue(), namespace)
            }
            Change::FileCreated { file } => {
                writeln!(self.writer, "{} {}", "create file:".blue(), file)
            }
            Change::KeyAdded { file, key } => {
                self.totals.added += 1;
                writeln!(
                    self.writer,
                    "{} -- {}",
                    file.bright_green(),
                    format!("add: {}", key).green()
                )
            }
            Change::KeyRemoved { file, key } => {
                self.totals.removed += 1;
                writeln!(
                    self.writer,
                    "{} -- {}",
                    file.bright_red(),
                    format!("remove: {}", key).red()
                )
            }
        };
    }

    fn issue(&mut self, issue: &Issue) {
        let severity = match issue.severity() {
            Severity::Error => {
                self.totals.errors += 1;
                "error:".bold().red()
            }
            Severity::Warning => {
                self.totals.warnings += 1;
                "warning:".bold().yellow()
            }
        };

        let path = self.display_path(issue.path());
        let _ = writeln!(
            self.writer,
            "{} {} | file: {}  {}",
            severity,
            issue.message(),
            path,
            issue.rule().to_string().dimmed().cyan()
        );
        if let Some(hint) = issue.hint() {
            let _ = writeln!(self.writer, "  {} {} {}", "=".blue(), "hint:".bold().cyan(), hint);
        }
    }

    fn display_path(&self, path: &str) -> String {
        self.base_dir
            .as_deref()
            .and_then(|base| Path::new(path).strip_prefix(base).ok())
            .map(|relative| relative.display().to_string())
            .unwrap_or_else(|| path.to_string())
    }
}
