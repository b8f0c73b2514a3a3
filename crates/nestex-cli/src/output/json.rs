//! JSON output formatter for machine-readable results.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use nestex_core::UnpackPlan;
use nestex_core::UnpackReport;
use serde::Serialize;
use std::io::Write;
use std::io::{self};
use std::path::Path;

pub struct JsonFormatter;

#[derive(Debug, Serialize)]
struct UnpackOutput {
    archive: String,
    format: &'static str,
    backend: &'static str,
    destination: String,
    created_directory: bool,
    top_level: Option<String>,
    entries_listed: usize,
    entries_extracted: usize,
    duration_ms: u128,
}

impl From<&UnpackReport> for UnpackOutput {
    fn from(report: &UnpackReport) -> Self {
        Self {
            archive: report.archive.display().to_string(),
            format: report.kind.name(),
            backend: report.backend,
            destination: report.destination.display().to_string(),
            created_directory: report.created_directory,
            top_level: report.top_level.clone(),
            entries_listed: report.entries_listed,
            entries_extracted: report.entries_extracted,
            duration_ms: report.duration.as_millis(),
        }
    }
}

#[derive(Debug, Serialize)]
struct PlanOutput {
    archive: String,
    format: &'static str,
    destination: String,
    creates_directory: bool,
    top_level: Option<String>,
    entries: Vec<String>,
}

impl From<&UnpackPlan> for PlanOutput {
    fn from(plan: &UnpackPlan) -> Self {
        Self {
            archive: plan.archive.path().display().to_string(),
            format: plan.archive.kind().name(),
            destination: plan.destination.path().display().to_string(),
            creates_directory: plan.destination.is_synthesized(),
            top_level: plan.top_level().map(str::to_owned),
            entries: plan
                .entries
                .iter()
                .filter(|e| !e.is_empty())
                .cloned()
                .collect(),
        }
    }
}

impl JsonFormatter {
    fn output<T: Serialize>(value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        writeln!(io::stdout(), "{json}")?;
        Ok(())
    }
}

impl OutputFormatter for JsonFormatter {
    // Progress lines are folded into the final document.
    fn format_creating_directory(&self, _path: &Path) {}

    fn format_extracting(&self, _archive: &Path, _destination: &Path) {}

    fn format_unpack_result(&self, report: &UnpackReport) -> Result<()> {
        Self::output(&JsonOutput::success("extract", UnpackOutput::from(report)))
    }

    fn format_plan(&self, plan: &UnpackPlan) -> Result<()> {
        Self::output(&JsonOutput::success("plan", PlanOutput::from(plan)))
    }

    fn format_warning(&self, message: &str) {
        #[derive(Serialize)]
        struct WarningData {
            message: String,
        }

        let output = JsonOutput::success(
            "warning",
            WarningData {
                message: message.to_string(),
            },
        );
        let _ = Self::output(&output);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use nestex_core::ArchiveKind;
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn test_unpack_output_structure() {
        let report = UnpackReport {
            archive: PathBuf::from("foo.zip"),
            kind: ArchiveKind::Zip,
            backend: "native",
            destination: PathBuf::from("/tmp/foo"),
            created_directory: true,
            top_level: None,
            entries_listed: 3,
            entries_extracted: 3,
            duration: Duration::from_millis(12),
        };

        let output = JsonOutput::success("extract", UnpackOutput::from(&report));
        let value = serde_json::to_value(&output).unwrap();

        assert_eq!(value["operation"], "extract");
        assert_eq!(value["status"], "success");
        assert_eq!(value["data"]["format"], "zip");
        assert_eq!(value["data"]["destination"], "/tmp/foo");
        assert_eq!(value["data"]["created_directory"], true);
        assert!(value["data"]["top_level"].is_null());
        assert_eq!(value["data"]["duration_ms"], 12);
    }
}
