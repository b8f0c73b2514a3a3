//! High-level public API.

use std::path::Path;

use crate::NoopObserver;
use crate::Result;
use crate::UnpackConfig;
use crate::UnpackReport;
use crate::Unpacker;

/// Extracts an archive into `destination`, creating a directory named after
/// the archive first if its entries are not already nested under one.
///
/// # Errors
///
/// Returns an error if:
/// - `source` does not exist
/// - the file name has no recognized archive suffix
/// - listing or extraction fails
/// - the synthesized directory already exists or cannot be created
///
/// # Examples
///
/// ```no_run
/// use nestex_core::UnpackConfig;
/// use nestex_core::unpack_archive;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let report = unpack_archive("photos.zip", ".", &UnpackConfig::default())?;
/// if report.created_directory {
///     println!("created {}", report.destination.display());
/// }
/// # Ok(())
/// # }
/// ```
pub fn unpack_archive<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    destination: Q,
    config: &UnpackConfig,
) -> Result<UnpackReport> {
    Unpacker::new(config).unpack(source, destination, &mut NoopObserver)
}
