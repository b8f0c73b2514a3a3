//! Error conversion utilities for CLI.
//!
//! Converts nestex-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::anyhow;
use nestex_core::UnpackError;

/// Converts `UnpackError` to a user-friendly anyhow error with a hint.
pub fn convert_unpack_error(err: UnpackError) -> anyhow::Error {
    match err {
        UnpackError::UnsupportedFormat { path } => anyhow!(
            "Archive format not supported: {}\n\
             HINT: Supported suffixes: .zip, .tar, .tar.gz, .tgz, .tar.bz, .tbz",
            path.display()
        ),
        UnpackError::SourceNotFound { path } => {
            anyhow!("Archive {} not found", path.display())
        }
        UnpackError::ListingFailed { archive, reason } => anyhow!(
            "Could not list '{}': {reason}\n\
             HINT: The archive may be corrupted. The external backend needs unzip and tar \
             installed; --backend native reads archives without them.",
            archive.display()
        ),
        UnpackError::ExtractionFailed { archive, reason } => anyhow!(
            "Could not extract '{}': {reason}\n\
             HINT: Files written before the failure were left in place.",
            archive.display()
        ),
        UnpackError::DirectoryCreateFailed { path, reason } => anyhow!(
            "Could not create top level directory '{}': {reason}\n\
             HINT: Move the existing directory aside or choose another destination.",
            path.display()
        ),
    }
}

/// Maps a core result into an anyhow result with hints.
pub fn add_unpack_context<T>(result: Result<T, UnpackError>) -> anyhow::Result<T> {
    result.map_err(convert_unpack_error)
}
