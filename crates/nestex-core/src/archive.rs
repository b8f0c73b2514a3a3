//! Validated reference to a source archive.

use std::path::Path;
use std::path::PathBuf;

use crate::Result;
use crate::UnpackError;
use crate::formats::ArchiveKind;
use crate::formats::guess_format;

/// An archive that exists on disk and has a recognized kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveRef {
    path: PathBuf,
    kind: ArchiveKind,
}

impl ArchiveRef {
    /// Validates `path` and guesses its kind.
    ///
    /// Existence is checked first, so a missing file with an unknown
    /// suffix reports [`UnpackError::SourceNotFound`].
    ///
    /// # Errors
    ///
    /// Returns [`UnpackError::SourceNotFound`] if nothing exists at `path`,
    /// or [`UnpackError::UnsupportedFormat`] if the suffix is not
    /// recognized.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(UnpackError::SourceNotFound {
                path: path.to_path_buf(),
            });
        }

        let kind = guess_format(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            kind,
        })
    }

    /// Creates a reference without touching the filesystem.
    #[must_use]
    pub fn new_unchecked(path: PathBuf, kind: ArchiveKind) -> Self {
        Self { path, kind }
    }

    /// Returns the path to the archive file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the archive's kind.
    #[must_use]
    pub const fn kind(&self) -> ArchiveKind {
        self.kind
    }
}
