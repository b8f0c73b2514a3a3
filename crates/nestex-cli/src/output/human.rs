//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use nestex_core::UnpackPlan;
use nestex_core::UnpackReport;
use std::path::Path;
use std::time::Duration;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn creating_line(path: &Path) -> String {
        format!("Creating top level directory {} for archive", path.display())
    }

    fn extracting_line(archive: &Path, destination: &Path) -> String {
        format!(
            "Extracting {} to {}",
            archive.display(),
            destination.display()
        )
    }

    fn format_duration(duration: Duration) -> String {
        let millis = duration.as_millis();
        if millis >= 1000 {
            format!("{:.1}s", duration.as_secs_f64())
        } else {
            format!("{millis}ms")
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_creating_directory(&self, path: &Path) {
        if self.quiet {
            return;
        }
        let _ = self.term.write_line(&Self::creating_line(path));
    }

    fn format_extracting(&self, archive: &Path, destination: &Path) {
        if self.quiet {
            return;
        }
        let _ = self
            .term
            .write_line(&Self::extracting_line(archive, destination));
    }

    fn format_unpack_result(&self, report: &UnpackReport) -> Result<()> {
        if self.quiet || !self.verbose {
            return Ok(());
        }

        if self.use_colors {
            let _ = self.term.write_line(&format!(
                "{} Extraction complete",
                style("✓").green().bold()
            ));
        } else {
            let _ = self.term.write_line("Extraction complete");
        }

        let _ = self.term.write_line(&format!(
            "  Format: {} ({} backend)",
            report.kind, report.backend
        ));
        let _ = self
            .term
            .write_line(&format!("  Entries listed: {}", report.entries_listed));
        if report.entries_extracted > 0 {
            let _ = self
                .term
                .write_line(&format!("  Entries written: {}", report.entries_extracted));
        }
        if let Some(top_level) = &report.top_level {
            let _ = self
                .term
                .write_line(&format!("  Top level directory: {top_level}"));
        }
        let _ = self.term.write_line(&format!(
            "  Duration: {}",
            Self::format_duration(report.duration)
        ));

        Ok(())
    }

    fn format_plan(&self, plan: &UnpackPlan) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        let destination = plan.destination.path();
        if plan.destination.is_synthesized() {
            let _ = self.term.write_line(&format!(
                "Would create top level directory {} for archive",
                destination.display()
            ));
        }
        let _ = self.term.write_line(&format!(
            "Would extract {} to {}",
            plan.archive.path().display(),
            destination.display()
        ));

        if self.verbose {
            for entry in plan.entries.iter().filter(|e| !e.is_empty()) {
                let _ = self.term.write_line(&format!("  {entry}"));
            }
        }

        Ok(())
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            let _ = self.term.write_line(&format!("WARNING: {message}"));
        }
    }
}
