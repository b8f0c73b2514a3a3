//! Output formatter trait for CLI results.

use anyhow::Result;
use nestex_core::UnpackPlan;
use nestex_core::UnpackReport;
use serde::Serialize;
use std::path::Path;

/// Common output formatter trait
pub trait OutputFormatter {
    /// Announce that a top-level directory is about to be created
    fn format_creating_directory(&self, path: &Path);

    /// Announce that extraction is about to start
    fn format_extracting(&self, archive: &Path, destination: &Path);

    /// Format the finished run
    fn format_unpack_result(&self, report: &UnpackReport) -> Result<()>;

    /// Format a dry-run plan
    fn format_plan(&self, plan: &UnpackPlan) -> Result<()>;

    /// Format warning message
    fn format_warning(&self, message: &str);
}

/// Generic JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    pub operation: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
}

impl<T: Serialize> JsonOutput<T> {
    pub fn success(operation: impl Into<String>, data: T) -> Self {
        Self {
            operation: operation.into(),
            status: Status::Success,
            data: Some(data),
        }
    }
}
