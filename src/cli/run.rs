//! The scan → normalize → prune → watch sequence behind the CLI.

use std::{
    env,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::{ExitStatus, args::Arguments, report::Reporter};
use crate::config::{CONFIG_FILE_NAME, Settings, load_config};
use crate::core::{Layout, Session, SourceFilter, Subscription, WatchEvent};
use crate::issues::{FileErrorIssue, Outcome};

pub fn run(args: Arguments) -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to determine the working directory")?;
    let settings = settings(&args, &cwd)?;
    let filter = SourceFilter::new(
        &settings.source_root,
        &settings.extensions,
        &settings.ignores,
    )?;

    let mut reporter = Reporter::stdout(args.common.verbose).with_base_dir(&cwd);
    reporter.banner(&settings);

    let layout = Layout::new(settings.locales_root.clone(), settings.languages.clone());
    let mut session = Session::new(layout, settings.global_namespace.clone());

    reporter.outcome(&session.seed());
    if !session.registry().is_seeded() {
        return Ok(ExitStatus::Error);
    }

    let walked = session.scan(&filter, |path, outcome| reporter.file(path, outcome));
    reporter.outcome(&walked);

    reporter.outcome(&session.normalize());

    // Without a full scan every key would look unused; the cause is already reported.
    if args.remove_unused && session.full_scan_done() {
        reporter.outcome(&session.prune()?);
    }

    if args.watch {
        watch(&mut session, filter, &mut reporter)?;
    }

    reporter.summary();
    Ok(ExitStatus::Success)
}

/// Configuration file values with command-line overrides applied.
fn settings(args: &Arguments, cwd: &Path) -> Result<Settings> {
    let loaded = load_config(cwd)?;

    if args.common.verbose && !loaded.from_file {
        eprintln!(
            "Note: No {} found, using default configuration",
            CONFIG_FILE_NAME
        );
    }
    let mut settings = Settings::resolve(&loaded.config, &loaded.base_dir);

    if let Some(source_root) = &args.common.source_root {
        settings.source_root = cwd.join(source_root);
    }
    if let Some(locales_root) = &args.common.locales_root {
        settings.locales_root = cwd.join(locales_root);
    }

    Ok(settings)
}

/// Process changed files until Ctrl+C.
fn watch<W: Write>(
    session: &mut Session,
    filter: SourceFilter,
    reporter: &mut Reporter<W>,
) -> Result<()> {
    let source_root: PathBuf = filter.root().to_path_buf();
    let mut subscription = Subscription::new(filter)?;

    let stop = subscription.stop_handle();
    ctrlc::set_handler(move || stop.stop()).context("Failed to set Ctrl+C handler")?;

    reporter.watching(&source_root);
    while let Some(event) = subscription.next_change() {
        match event {
            WatchEvent::Changed(path) => {
                let outcome = session.process_file(&path);
                reporter.file(&path, &outcome);
            }
            WatchEvent::Failed(error) => {
                let mut outcome = Outcome::new();
                outcome.issue(FileErrorIssue {
                    file_path: source_root.display().to_string(),
                    error,
                });
                reporter.outcome(&outcome);
            }
        }
    }
    reporter.stopped_watching();

    Ok(())
}
