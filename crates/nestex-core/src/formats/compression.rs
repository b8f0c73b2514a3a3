//! Compression sniffing for tar-family archives.
//!
//! `tar -x` picks a decompressor from the data itself; the native backend does the
//! same by looking at the first bytes of the file instead of trusting the
//! suffix, so a `.tar.bz` that is really gzip still opens.

use std::io;
use std::io::Read;
use std::io::Seek;

const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];
const BZIP2_MAGIC: [u8; 3] = *b"BZh";

/// Compression wrapped around a tar stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compression {
    /// Plain tar.
    None,
    /// Gzip (deflate).
    Gzip,
    /// Bzip2.
    Bzip2,
}

impl Compression {
    /// Returns a human-readable name for this codec.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Gzip => "gzip",
            Self::Bzip2 => "bzip2",
        }
    }

    /// Identifies the codec from the leading bytes of a file.
    #[must_use]
    pub fn from_magic(header: &[u8]) -> Self {
        if header.starts_with(&GZIP_MAGIC) {
            Self::Gzip
        } else if header.starts_with(&BZIP2_MAGIC) {
            Self::Bzip2
        } else {
            Self::None
        }
    }

    /// Reads the leading bytes of `reader` and rewinds it.
    ///
    /// Files shorter than the longest magic are sniffed on whatever bytes
    /// are there.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from reading or seeking.
    pub fn sniff<R: Read + Seek>(reader: &mut R) -> io::Result<Self> {
        let mut header = [0u8; 3];
        let mut filled = 0;
        while filled < header.len() {
            let n = reader.read(&mut header[filled..])?;
            if n == 0 {
                break;
            }
            filled += n;
        }
        reader.rewind()?;
        Ok(Self::from_magic(&header[..filled]))
    }
}
