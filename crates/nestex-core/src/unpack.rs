//! The unpack pipeline: validate, list, decide, extract.
//!
//! ```text
//! ValidateSource -> ListEntries -> TestTopLevel -> Reuse | CreateSubdirectory -> Extract
//! ```
//!
//! Every step either succeeds or aborts the run. Nothing is retried and
//! nothing already written is removed.

use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

use tracing::debug;
use tracing::info;

use crate::ArchiveRef;
use crate::Result;
use crate::UnpackConfig;
use crate::UnpackError;
use crate::UnpackObserver;
use crate::UnpackReport;
use crate::backend;
use crate::backend::ArchiveBackend;
use crate::formats::archive_stem;
use crate::layout::top_level_directory;

/// Where an archive will be extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// The archive already has a single top-level directory; extract
    /// straight into the given destination.
    Reuse(PathBuf),
    /// A directory named after the archive must be created inside the
    /// given destination first.
    Synthesize(PathBuf),
}

impl Destination {
    /// Returns the directory extraction writes into.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Reuse(path) | Self::Synthesize(path) => path,
        }
    }

    /// Returns `true` if the directory has to be created.
    #[must_use]
    pub const fn is_synthesized(&self) -> bool {
        matches!(self, Self::Synthesize(_))
    }
}

/// Decides where `archive` goes, given its listing.
///
/// # Errors
///
/// Returns [`UnpackError::DirectoryCreateFailed`] if a directory is needed
/// but no name can be derived from the archive's file name.
pub fn resolve_destination<S: AsRef<str>>(
    archive: &ArchiveRef,
    entries: &[S],
    destination: &Path,
) -> Result<Destination> {
    if crate::layout::has_top_level_directory(entries) {
        return Ok(Destination::Reuse(destination.to_path_buf()));
    }

    let stem = archive_stem(archive.path()).ok_or_else(|| UnpackError::DirectoryCreateFailed {
        path: destination.to_path_buf(),
        reason: format!(
            "cannot derive a directory name from {}",
            archive.path().display()
        ),
    })?;

    Ok(Destination::Synthesize(destination.join(stem)))
}

/// Everything decided before anything is written.
#[derive(Debug, Clone)]
pub struct UnpackPlan {
    /// The validated source archive.
    pub archive: ArchiveRef,
    /// Entry paths as the backend listed them.
    pub entries: Vec<String>,
    /// Where extraction will write.
    pub destination: Destination,
}

impl UnpackPlan {
    /// Returns the directory the archive already nests everything under.
    #[must_use]
    pub fn top_level(&self) -> Option<&str> {
        top_level_directory(&self.entries)
    }

    /// Returns the number of non-empty entries in the listing.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_empty()).count()
    }
}

/// Runs the unpack pipeline with one backend.
///
/// # Examples
///
/// ```no_run
/// use nestex_core::NoopObserver;
/// use nestex_core::UnpackConfig;
/// use nestex_core::Unpacker;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let unpacker = Unpacker::new(&UnpackConfig::default());
/// let report = unpacker.unpack("release.zip", "/tmp", &mut NoopObserver)?;
/// println!("extracted into {}", report.destination.display());
/// # Ok(())
/// # }
/// ```
pub struct Unpacker {
    backend: Box<dyn ArchiveBackend>,
}

impl Unpacker {
    /// Creates an unpacker using the backend selected by `config`.
    #[must_use]
    pub fn new(config: &UnpackConfig) -> Self {
        Self::with_backend(backend::from_config(config))
    }

    /// Creates an unpacker around an explicit backend.
    #[must_use]
    pub fn with_backend(backend: Box<dyn ArchiveBackend>) -> Self {
        Self { backend }
    }

    /// Returns the name of the backend in use.
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Validates the source, lists it and decides the destination, without
    /// writing anything.
    ///
    /// # Errors
    ///
    /// Returns [`UnpackError::SourceNotFound`] before any listing is
    /// attempted if `source` does not exist, then
    /// [`UnpackError::UnsupportedFormat`], [`UnpackError::ListingFailed`] or
    /// [`UnpackError::DirectoryCreateFailed`] from the later steps.
    pub fn plan<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        source: P,
        destination: Q,
    ) -> Result<UnpackPlan> {
        let archive = ArchiveRef::open(source)?;
        debug!(archive = %archive.path().display(), kind = %archive.kind(), "source validated");

        let entries = self.backend.list(&archive)?;
        let destination = resolve_destination(&archive, &entries, destination.as_ref())?;
        debug!(
            destination = %destination.path().display(),
            synthesized = destination.is_synthesized(),
            "destination resolved"
        );

        Ok(UnpackPlan {
            archive,
            entries,
            destination,
        })
    }

    /// Carries out a plan: creates the synthesized directory if needed,
    /// then extracts.
    ///
    /// # Errors
    ///
    /// Returns [`UnpackError::DirectoryCreateFailed`] if the synthesized
    /// directory already exists or cannot be created, and
    /// [`UnpackError::ExtractionFailed`] if extraction fails or the
    /// destination is not a directory.
    pub fn execute(
        &self,
        plan: &UnpackPlan,
        observer: &mut dyn UnpackObserver,
    ) -> Result<UnpackReport> {
        let started = Instant::now();
        let target = plan.destination.path();

        if plan.destination.is_synthesized() {
            observer.on_create_directory(target);
            create_subdirectory(target)?;
        }

        if !target.is_dir() {
            return Err(UnpackError::extraction(
                plan.archive.path(),
                format!("destination {} is not a directory", target.display()),
            ));
        }

        observer.on_extract_start(plan.archive.path(), target);
        info!(
            archive = %plan.archive.path().display(),
            destination = %target.display(),
            backend = self.backend.name(),
            "extracting"
        );
        let entries_extracted = self.backend.extract(&plan.archive, target, observer)?;
        observer.on_complete();

        Ok(UnpackReport {
            archive: plan.archive.path().to_path_buf(),
            kind: plan.archive.kind(),
            backend: self.backend.name(),
            destination: target.to_path_buf(),
            created_directory: plan.destination.is_synthesized(),
            top_level: plan.top_level().map(str::to_owned),
            entries_listed: plan.entry_count(),
            entries_extracted,
            duration: started.elapsed(),
        })
    }

    /// Plans and executes in one go.
    ///
    /// # Errors
    ///
    /// Any error from [`Unpacker::plan`] or [`Unpacker::execute`].
    pub fn unpack<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        source: P,
        destination: Q,
        observer: &mut dyn UnpackObserver,
    ) -> Result<UnpackReport> {
        let started = Instant::now();
        let plan = self.plan(source, destination)?;
        let mut report = self.execute(&plan, observer)?;
        report.duration = started.elapsed();
        Ok(report)
    }
}

fn create_subdirectory(path: &Path) -> Result<()> {
    fs::create_dir(path).map_err(|e| UnpackError::DirectoryCreateFailed {
        path: path.to_path_buf(),
        reason: if e.kind() == io::ErrorKind::AlreadyExists {
            "directory already exists".to_string()
        } else {
            e.to_string()
        },
    })
}
