//! Unpack reporting and progress observation.

use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use crate::formats::ArchiveKind;

/// Report of a finished unpack run.
#[derive(Debug, Clone)]
pub struct UnpackReport {
    /// The archive that was unpacked.
    pub archive: PathBuf,

    /// Kind guessed from the archive's file name.
    pub kind: ArchiveKind,

    /// Name of the backend that listed and extracted the archive.
    pub backend: &'static str,

    /// Directory the archive was extracted into.
    pub destination: PathBuf,

    /// Whether `destination` was created for this archive.
    pub created_directory: bool,

    /// The directory the archive already nested everything under, if any.
    pub top_level: Option<String>,

    /// Number of non-empty entries in the listing.
    pub entries_listed: usize,

    /// Number of entries the backend reported as written. The external
    /// backend does not report entries and leaves this at zero.
    pub entries_extracted: usize,

    /// Duration of the whole run, listing included.
    pub duration: Duration,
}

/// Observer for the progress of an unpack run.
///
/// All methods default to doing nothing.
///
/// # Examples
///
/// ```
/// use nestex_core::UnpackObserver;
/// use std::path::Path;
///
/// struct Printer;
///
/// impl UnpackObserver for Printer {
///     fn on_extract_start(&mut self, archive: &Path, destination: &Path) {
///         println!("Extracting {} to {}", archive.display(), destination.display());
///     }
/// }
/// ```
pub trait UnpackObserver {
    /// Called right before the synthesized top-level directory is created.
    fn on_create_directory(&mut self, _path: &Path) {}

    /// Called right before extraction starts.
    fn on_extract_start(&mut self, _archive: &Path, _destination: &Path) {}

    /// Called after each entry is written, by backends that can tell.
    fn on_entry_extracted(&mut self, _entry: &Path) {}

    /// Called once extraction has finished successfully.
    fn on_complete(&mut self) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl UnpackObserver for NoopObserver {}
