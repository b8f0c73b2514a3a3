//! In-process backend built on the `zip` and `tar` crates.

use std::fs;
use std::fs::File;
use std::io;
use std::io::BufReader;
use std::io::Read;
use std::path::Component;
use std::path::Path;

use bzip2::read::BzDecoder;
use flate2::read::GzDecoder;
use tracing::debug;
use tracing::trace;

use super::ArchiveBackend;
use crate::ArchiveRef;
use crate::Result;
use crate::UnpackError;
use crate::UnpackObserver;
use crate::formats::ArchiveKind;
use crate::formats::Compression;

/// Reads archives directly instead of parsing tool output.
///
/// Entry names come from the archive's own records, so directory entries
/// keep their trailing `/` and names with odd whitespace survive intact.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeBackend;

impl ArchiveBackend for NativeBackend {
    fn name(&self) -> &'static str {
        "native"
    }

    fn list(&self, archive: &ArchiveRef) -> Result<Vec<String>> {
        let path = archive.path();
        let entries = match archive.kind() {
            ArchiveKind::Zip => list_zip(path),
            ArchiveKind::Tar => list_tar(path),
        }
        .map_err(|e| UnpackError::listing(path, e))?;

        debug!(entries = entries.len(), "archive listed");
        Ok(entries)
    }

    fn extract(
        &self,
        archive: &ArchiveRef,
        destination: &Path,
        observer: &mut dyn UnpackObserver,
    ) -> Result<usize> {
        let path = archive.path();
        match archive.kind() {
            ArchiveKind::Zip => extract_zip(path, destination, observer),
            ArchiveKind::Tar => extract_tar(path, destination, observer),
        }
        .map_err(|e| UnpackError::extraction(path, e))
    }
}

fn open_zip(path: &Path) -> io::Result<zip::ZipArchive<BufReader<File>>> {
    let file = BufReader::new(File::open(path)?);
    zip::ZipArchive::new(file).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn open_tar(path: &Path) -> io::Result<tar::Archive<Box<dyn Read>>> {
    let mut file = File::open(path)?;
    let compression = Compression::sniff(&mut file)?;
    debug!(compression = compression.name(), "opening tar stream");

    let reader = BufReader::new(file);
    let stream: Box<dyn Read> = match compression {
        Compression::None => Box::new(reader),
        Compression::Gzip => Box::new(GzDecoder::new(reader)),
        Compression::Bzip2 => Box::new(BzDecoder::new(reader)),
    };
    Ok(tar::Archive::new(stream))
}

fn list_zip(path: &Path) -> io::Result<Vec<String>> {
    let mut archive = open_zip(path)?;
    let mut entries = Vec::with_capacity(archive.len());

    for i in 0..archive.len() {
        let entry = archive
            .by_index(i)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        entries.push(entry.name().to_owned());
    }

    Ok(entries)
}

fn list_tar(path: &Path) -> io::Result<Vec<String>> {
    let mut archive = open_tar(path)?;
    let mut entries = Vec::new();

    for entry in archive.entries()? {
        let entry = entry?;
        entries.push(String::from_utf8_lossy(&entry.path_bytes()).into_owned());
    }

    Ok(entries)
}

fn extract_tar(
    path: &Path,
    destination: &Path,
    observer: &mut dyn UnpackObserver,
) -> io::Result<usize> {
    let mut archive = open_tar(path)?;
    archive.set_overwrite(true);

    let mut written = 0;
    for entry in archive.entries()? {
        let mut entry = entry?;
        let name = entry.path()?.into_owned();

        if !entry.unpack_in(destination)? {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("entry {} escapes the destination", name.display()),
            ));
        }

        trace!(entry = %name.display(), "unpacked");
        observer.on_entry_extracted(&name);
        written += 1;
    }

    Ok(written)
}

fn extract_zip(
    path: &Path,
    destination: &Path,
    observer: &mut dyn UnpackObserver,
) -> io::Result<usize> {
    let mut archive = open_zip(path)?;
    let root = destination.canonicalize()?;

    let mut written = 0;
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let Some(relative) = entry.enclosed_name() else {
            return Err(escape_error(entry.name()));
        };
        let target = root.join(&relative);

        if entry.is_dir() {
            ensure_inside(&root, &target, &relative)?;
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                ensure_inside(&root, parent, &relative)?;
                fs::create_dir_all(parent)?;
            }
            write_zip_entry(&mut entry, &target, &relative)?;
        }

        trace!(entry = %relative.display(), "unpacked");
        observer.on_entry_extracted(&relative);
        written += 1;
    }

    Ok(written)
}

fn escape_error(name: impl std::fmt::Display) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("entry {name} escapes the destination"),
    )
}

/// Fails if `path`, once existing symlinks along it are followed, lands
/// outside `root`. `root` must already be canonical.
fn ensure_inside(root: &Path, path: &Path, entry: &Path) -> io::Result<()> {
    let mut existing = path;
    while fs::symlink_metadata(existing).is_err() {
        match existing.parent() {
            Some(parent) => existing = parent,
            None => break,
        }
    }

    if existing.canonicalize()?.starts_with(root) {
        Ok(())
    } else {
        Err(escape_error(entry.display()))
    }
}

/// Checks that a symlink at `link` pointing to `target` stays inside the
/// extraction root, resolving `..` lexically from the link's directory.
#[cfg(unix)]
fn link_target_is_enclosed(link: &Path, target: &Path) -> bool {
    if target.is_absolute() {
        return false;
    }

    let parent = link.parent().unwrap_or_else(|| Path::new(""));
    let mut depth = 0usize;
    for component in parent.components().chain(target.components()) {
        match component {
            Component::Normal(_) => depth += 1,
            Component::CurDir => {}
            Component::ParentDir => match depth.checked_sub(1) {
                Some(d) => depth = d,
                None => return false,
            },
            Component::RootDir | Component::Prefix(_) => return false,
        }
    }
    true
}

fn remove_existing_link(target: &Path) -> io::Result<()> {
    match fs::symlink_metadata(target) {
        Ok(meta) if meta.file_type().is_symlink() => fs::remove_file(target),
        _ => Ok(()),
    }
}

#[cfg(unix)]
fn write_zip_entry<R: Read>(
    entry: &mut zip::read::ZipFile<'_, R>,
    target: &Path,
    relative: &Path,
) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    const S_IFMT: u32 = 0o170_000;
    const S_IFLNK: u32 = 0o120_000;

    let mode = entry.unix_mode();
    if mode.is_some_and(|m| m & S_IFMT == S_IFLNK) {
        let mut link_target = String::new();
        entry.read_to_string(&mut link_target)?;
        if !link_target_is_enclosed(relative, Path::new(&link_target)) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "symlink {} -> {link_target} points outside the destination",
                    relative.display()
                ),
            ));
        }
        if fs::symlink_metadata(target).is_ok() {
            fs::remove_file(target)?;
        }
        return std::os::unix::fs::symlink(link_target, target);
    }

    // Never write through a link left by an earlier entry.
    remove_existing_link(target)?;
    let mut file = File::create(target)?;
    io::copy(entry, &mut file)?;

    if let Some(mode) = mode {
        fs::set_permissions(target, fs::Permissions::from_mode(mode & 0o777))?;
    }
    Ok(())
}

#[cfg(not(unix))]
fn write_zip_entry<R: Read>(
    entry: &mut zip::read::ZipFile<'_, R>,
    target: &Path,
    _relative: &Path,
) -> io::Result<()> {
    remove_existing_link(target)?;
    let mut file = File::create(target)?;
    io::copy(entry, &mut file)?;
    Ok(())
}
