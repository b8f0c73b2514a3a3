//! Extract command implementation.

use crate::cli::Cli;
use crate::error::add_unpack_context;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Context;
use anyhow::Result;
use nestex_core::UnpackObserver;
use nestex_core::Unpacker;
use std::env;
use std::path::Path;
use std::path::PathBuf;
use tracing::debug;

/// Forwards unpack events to the formatter, and to the spinner when one is
/// shown.
struct FormatterObserver<'a> {
    formatter: &'a dyn OutputFormatter,
    progress: Option<CliProgress>,
}

impl UnpackObserver for FormatterObserver<'_> {
    fn on_create_directory(&mut self, path: &Path) {
        self.formatter.format_creating_directory(path);
    }

    fn on_extract_start(&mut self, archive: &Path, destination: &Path) {
        self.formatter.format_extracting(archive, destination);
        if let Some(progress) = &mut self.progress {
            progress.on_extract_start(archive, destination);
        }
    }

    fn on_entry_extracted(&mut self, entry: &Path) {
        if let Some(progress) = &mut self.progress {
            progress.on_entry_extracted(entry);
        }
    }

    fn on_complete(&mut self) {
        if let Some(progress) = &mut self.progress {
            progress.on_complete();
        }
    }
}

pub fn execute(cli: &Cli, source: &Path, formatter: &dyn OutputFormatter) -> Result<()> {
    let destination = resolve_destination_arg(cli.destination.as_deref())?;
    let unpacker = Unpacker::new(&cli.unpack_config());
    debug!(backend = unpacker.backend_name(), "unpacker ready");

    let plan = add_unpack_context(unpacker.plan(source, &destination))?;
    if plan.entry_count() == 0 {
        formatter.format_warning(&format!("{} has no entries", source.display()));
    }

    if cli.dry_run {
        return formatter.format_plan(&plan);
    }

    // Spinner only on an interactive terminal with human output.
    let show_progress = !cli.quiet && !cli.json && CliProgress::should_show();
    let mut observer = FormatterObserver {
        formatter,
        progress: show_progress.then(CliProgress::new),
    };

    let report = add_unpack_context(unpacker.execute(&plan, &mut observer))?;
    drop(observer);

    formatter.format_unpack_result(&report)
}

fn resolve_destination_arg(destination: Option<&Path>) -> Result<PathBuf> {
    match destination {
        Some(dir) => Ok(dir.to_path_buf()),
        None => env::current_dir().context("failed to get current directory"),
    }
}
