//! Archive format recognition.

pub mod compression;
pub mod detect;

pub use compression::Compression;
pub use detect::ArchiveKind;
pub use detect::archive_stem;
pub use detect::guess_format;
