//! Archive extraction that never scatters files into the destination.
//!
//! `nestex-core` lists a zip or tar archive, checks whether every entry is
//! already nested under one top-level directory, and if not creates a
//! directory named after the archive before extracting into it.
//!
//! Listing and extraction go through an [`ArchiveBackend`]: either the
//! system's `unzip` and `tar` programs, or the `zip` and `tar` crates.
//!
//! # Examples
//!
//! ```no_run
//! use nestex_core::BackendKind;
//! use nestex_core::UnpackConfig;
//! use nestex_core::unpack_archive;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = UnpackConfig {
//!     backend: BackendKind::Native,
//!     ..Default::default()
//! };
//! let report = unpack_archive("archive.tar.gz", "/output/dir", &config)?;
//! println!("Extracted into {}", report.destination.display());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod api;
pub mod archive;
pub mod backend;
pub mod config;
pub mod error;
pub mod formats;
pub mod layout;
pub mod listing;
pub mod report;
pub mod unpack;

#[cfg(test)]
mod test_utils;

pub use api::unpack_archive;
pub use archive::ArchiveRef;
pub use backend::ArchiveBackend;
pub use config::BackendKind;
pub use config::ToolPaths;
pub use config::UnpackConfig;
pub use error::Result;
pub use error::UnpackError;
pub use formats::ArchiveKind;
pub use layout::has_top_level_directory;
pub use report::NoopObserver;
pub use report::UnpackObserver;
pub use report::UnpackReport;
pub use unpack::Destination;
pub use unpack::UnpackPlan;
pub use unpack::Unpacker;
