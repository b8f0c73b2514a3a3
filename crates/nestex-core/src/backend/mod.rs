//! Listing and extraction backends.
//!
//! The orchestrator only needs two things from a backend: the archive's
//! entry paths in listing order, and a way to write every entry into a
//! directory that already exists.

pub mod external;
pub mod native;

use std::path::Path;

use crate::ArchiveRef;
use crate::Result;
use crate::UnpackObserver;
use crate::config::BackendKind;
use crate::config::UnpackConfig;

pub use external::ExternalTools;
pub use native::NativeBackend;

/// A way to list and extract archives.
pub trait ArchiveBackend {
    /// Short name for logs and reports.
    fn name(&self) -> &'static str;

    /// Returns the archive's entry paths in listing order.
    ///
    /// Directory entries keep a trailing `/` when the underlying format
    /// records one. The list may contain empty strings.
    ///
    /// # Errors
    ///
    /// Returns [`crate::UnpackError::ListingFailed`] if the archive cannot
    /// be read.
    fn list(&self, archive: &ArchiveRef) -> Result<Vec<String>>;

    /// Extracts every entry of the archive into `destination`, which must
    /// already exist. Returns the number of entries written, or zero when
    /// the backend cannot tell.
    ///
    /// # Errors
    ///
    /// Returns [`crate::UnpackError::ExtractionFailed`] if any entry cannot
    /// be written.
    fn extract(
        &self,
        archive: &ArchiveRef,
        destination: &Path,
        observer: &mut dyn UnpackObserver,
    ) -> Result<usize>;
}

/// Builds the backend selected by `config`.
#[must_use]
pub fn from_config(config: &UnpackConfig) -> Box<dyn ArchiveBackend> {
    match config.backend {
        BackendKind::External => Box::new(ExternalTools::new(config.tools.clone())),
        BackendKind::Native => Box::new(NativeBackend),
    }
}
