//! Spinner shown on stderr while an archive is being extracted.

use console::Term;
use indicatif::ProgressBar;
use indicatif::ProgressStyle;
use nestex_core::UnpackObserver;
use std::path::Path;
use std::time::Duration;

/// CLI spinner implementing `UnpackObserver`.
///
/// The external backend reports no per-entry progress, so the spinner ticks
/// on its own and only counts entries when the native backend supplies them.
/// Cleared on drop.
pub struct CliProgress {
    bar: ProgressBar,
    entries: u64,
}

impl CliProgress {
    #[must_use]
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg} ({pos} entries, {elapsed})")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );

        Self { bar, entries: 0 }
    }

    /// Checks if we should show progress (TTY detection).
    #[must_use]
    pub fn should_show() -> bool {
        Term::stderr().is_term()
    }
}

impl Default for CliProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CliProgress {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

impl UnpackObserver for CliProgress {
    fn on_extract_start(&mut self, archive: &Path, _destination: &Path) {
        let name = archive
            .file_name()
            .map_or_else(|| archive.display().to_string(), |n| n.to_string_lossy().into_owned());
        self.bar.set_message(format!("Extracting {name}"));
        self.bar.enable_steady_tick(Duration::from_millis(100));
    }

    fn on_entry_extracted(&mut self, _entry: &Path) {
        self.entries += 1;
        self.bar.set_position(self.entries);
    }

    fn on_complete(&mut self) {
        self.bar.finish_and_clear();
    }
}
