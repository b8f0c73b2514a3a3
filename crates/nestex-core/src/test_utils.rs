//! In-memory archive builders for unit tests.
//!
//! Entries whose name ends in `/` become directory entries.

#![allow(clippy::unwrap_used)]

use std::io::Cursor;
use std::io::Write;

/// Creates an in-memory TAR archive from `(path, content)` pairs.
pub fn create_test_tar(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut ar = tar::Builder::new(Vec::new());
    for &(path, data) in entries {
        let mut header = tar::Header::new_gnu();
        if path.ends_with('/') {
            header.set_entry_type(tar::EntryType::Directory);
            header.set_size(0);
            header.set_mode(0o755);
        } else {
            header.set_size(data.len() as u64);
            header.set_mode(0o644);
        }
        header.set_cksum();
        ar.append_data(&mut header, path, data.as_bytes()).unwrap();
    }
    ar.into_inner().unwrap()
}

/// Creates an in-memory ZIP archive from `(path, content)` pairs.
pub fn create_test_zip(entries: &[(&str, &str)]) -> Vec<u8> {
    use zip::write::SimpleFileOptions;
    use zip::write::ZipWriter;

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    for &(path, data) in entries {
        if path.ends_with('/') {
            let options = SimpleFileOptions::default().unix_permissions(0o755);
            zip.add_directory(path, options).unwrap();
        } else {
            let options = SimpleFileOptions::default()
                .compression_method(zip::CompressionMethod::Stored)
                .unix_permissions(0o644);
            zip.start_file(path, options).unwrap();
            zip.write_all(data.as_bytes()).unwrap();
        }
    }

    zip.finish().unwrap().into_inner()
}

/// Creates a ZIP archive holding `(link, target)` symlinks followed by
/// `(path, content)` files.
#[cfg(unix)]
pub fn create_test_zip_with_links(links: &[(&str, &str)], files: &[(&str, &str)]) -> Vec<u8> {
    use zip::write::SimpleFileOptions;
    use zip::write::ZipWriter;

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    for &(link, target) in links {
        zip.add_symlink(link, target, SimpleFileOptions::default())
            .unwrap();
    }
    for &(path, data) in files {
        let options = SimpleFileOptions::default().unix_permissions(0o644);
        zip.start_file(path, options).unwrap();
        zip.write_all(data.as_bytes()).unwrap();
    }

    zip.finish().unwrap().into_inner()
}

/// Gzip-compresses `data`.
pub fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// Bzip2-compresses `data`.
pub fn bzip2(data: &[u8]) -> Vec<u8> {
    let mut encoder = bzip2::write::BzEncoder::new(Vec::new(), bzip2::Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_produce_data() {
        assert!(!create_test_tar(&[("file.txt", "hello")]).is_empty());
        assert!(!create_test_zip(&[("dir/", ""), ("dir/file.txt", "hello")]).is_empty());
    }

    #[test]
    fn test_compressors_write_magic() {
        assert!(gzip(b"x").starts_with(&[0x1F, 0x8B]));
        assert!(bzip2(b"x").starts_with(b"BZh"));
    }
}
