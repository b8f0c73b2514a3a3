//! Error types for archive unpacking operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `UnpackError`.
pub type Result<T> = std::result::Result<T, UnpackError>;

/// Errors that can occur while unpacking an archive.
///
/// Every variant is fatal for the run that produced it: nothing is retried
/// and nothing already written is cleaned up.
#[derive(Error, Debug)]
pub enum UnpackError {
    /// The archive's file name does not end in a recognized suffix.
    #[error("can't guess archive type for {}", path.display())]
    UnsupportedFormat {
        /// The archive path that was inspected.
        path: PathBuf,
    },

    /// The source archive does not exist.
    #[error("archive {} not found", path.display())]
    SourceNotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// The archive's entries could not be listed.
    #[error("failed to list {}: {reason}", archive.display())]
    ListingFailed {
        /// The archive being listed.
        archive: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// The archive could not be extracted.
    #[error("failed to extract {}: {reason}", archive.display())]
    ExtractionFailed {
        /// The archive being extracted.
        archive: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// The synthesized top-level directory could not be created.
    #[error("failed to create directory {}: {reason}", path.display())]
    DirectoryCreateFailed {
        /// The directory that was to be created.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },
}

impl UnpackError {
    /// Returns `true` if this error came from listing or extracting, as
    /// opposed to validating inputs or preparing the destination.
    ///
    /// # Examples
    ///
    /// ```
    /// use nestex_core::UnpackError;
    /// use std::path::PathBuf;
    ///
    /// let err = UnpackError::ListingFailed {
    ///     archive: PathBuf::from("a.zip"),
    ///     reason: "unzip exited with status 9".to_string(),
    /// };
    /// assert!(err.is_subprocess_failure());
    ///
    /// let err = UnpackError::SourceNotFound {
    ///     path: PathBuf::from("a.zip"),
    /// };
    /// assert!(!err.is_subprocess_failure());
    /// ```
    #[must_use]
    pub const fn is_subprocess_failure(&self) -> bool {
        matches!(
            self,
            Self::ListingFailed { .. } | Self::ExtractionFailed { .. }
        )
    }

    /// Returns the path this error is about.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::UnsupportedFormat { path }
            | Self::SourceNotFound { path }
            | Self::DirectoryCreateFailed { path, .. } => path,
            Self::ListingFailed { archive, .. } | Self::ExtractionFailed { archive, .. } => archive,
        }
    }

    pub(crate) fn listing(archive: &std::path::Path, reason: impl std::fmt::Display) -> Self {
        Self::ListingFailed {
            archive: archive.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn extraction(archive: &std::path::Path, reason: impl std::fmt::Display) -> Self {
        Self::ExtractionFailed {
            archive: archive.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_error_display() {
        let err = UnpackError::UnsupportedFormat {
            path: PathBuf::from("notes.rar"),
        };
        assert_eq!(err.to_string(), "can't guess archive type for notes.rar");

        let err = UnpackError::SourceNotFound {
            path: PathBuf::from("missing.zip"),
        };
        assert_eq!(err.to_string(), "archive missing.zip not found");
    }

    #[test]
    fn test_listing_helper() {
        let err = UnpackError::listing(Path::new("a.tar"), "tar exited with status 2");
        assert!(matches!(err, UnpackError::ListingFailed { .. }));
        assert!(err.to_string().contains("a.tar"));
        assert!(err.to_string().contains("status 2"));
    }

    #[test]
    fn test_extraction_helper() {
        let err = UnpackError::extraction(Path::new("a.zip"), "disk full");
        assert!(err.is_subprocess_failure());
        assert_eq!(err.path(), Path::new("a.zip"));
    }

    #[test]
    fn test_directory_create_failed_path() {
        let err = UnpackError::DirectoryCreateFailed {
            path: PathBuf::from("/tmp/foo"),
            reason: "already exists".to_string(),
        };
        assert!(!err.is_subprocess_failure());
        assert_eq!(err.path(), Path::new("/tmp/foo"));
        assert!(err.to_string().contains("already exists"));
    }
}
