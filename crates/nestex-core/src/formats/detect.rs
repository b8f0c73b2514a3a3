//! Archive kind detection from file names.

use std::fmt;
use std::path::Path;

use crate::Result;
use crate::UnpackError;

/// Suffixes that mark a tar-family archive.
const TAR_SUFFIXES: [&str; 5] = [".tar.gz", ".tar.bz", ".tar", ".tgz", ".tbz"];

const ZIP_SUFFIX: &str = ".zip";

/// Supported archive kinds.
///
/// Compression is not part of the kind: tar-family archives are
/// decompressed by whatever reads them. `tar -x` detects it from the
/// content, and so does the native backend's magic-byte sniffing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveKind {
    /// ZIP archive.
    Zip,
    /// Tar archive, optionally gzip or bzip2 compressed.
    Tar,
}

impl ArchiveKind {
    /// Returns the lowercase tag for this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zip => "zip",
            Self::Tar => "tar",
        }
    }
}

impl fmt::Display for ArchiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Guesses the archive kind from the file name's suffix.
///
/// Matching is case-sensitive. `.zip` is a zip archive; `.tar`, `.tar.gz`,
/// `.tgz`, `.tar.bz` and `.tbz` are tar archives.
///
/// # Errors
///
/// Returns [`UnpackError::UnsupportedFormat`] for any other suffix,
/// including no suffix at all.
///
/// # Examples
///
/// ```
/// use nestex_core::formats::detect::ArchiveKind;
/// use nestex_core::formats::detect::guess_format;
/// use std::path::Path;
///
/// assert_eq!(guess_format(Path::new("src.tgz")).unwrap(), ArchiveKind::Tar);
/// assert!(guess_format(Path::new("src.rar")).is_err());
/// ```
pub fn guess_format(path: &Path) -> Result<ArchiveKind> {
    let unsupported = || UnpackError::UnsupportedFormat {
        path: path.to_path_buf(),
    };

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(unsupported)?;

    if name.ends_with(ZIP_SUFFIX) {
        Ok(ArchiveKind::Zip)
    } else if TAR_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
        Ok(ArchiveKind::Tar)
    } else {
        Err(unsupported())
    }
}

/// Returns the archive's file name with its last extension removed.
///
/// Only the final `.ext` goes: `foo.tar.gz` becomes `foo.tar`, `foo.tgz`
/// becomes `foo`. Returns `None` when the name has no extension or nothing
/// is left once it is gone.
#[must_use]
pub fn archive_stem(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    let (stem, _extension) = name.rsplit_once('.')?;

    (!stem.is_empty()).then_some(stem)
}
