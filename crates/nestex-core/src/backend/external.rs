//! Backend that shells out to `unzip` and `tar`.

use std::path::Path;
use std::process::Command;
use std::process::Stdio;

use tracing::debug;

use super::ArchiveBackend;
use crate::ArchiveRef;
use crate::Result;
use crate::UnpackError;
use crate::UnpackObserver;
use crate::config::ToolPaths;
use crate::formats::ArchiveKind;
use crate::listing::parse_tar_listing;
use crate::listing::parse_zip_listing;

/// Lists with `unzip -l` / `tar -taf` and extracts with `unzip -d` /
/// `tar --directory ... -xaf`.
///
/// Each call blocks until the child exits. The lister's standard error and
/// all of the extractor's output go straight to the terminal.
#[derive(Debug, Clone, Default)]
pub struct ExternalTools {
    tools: ToolPaths,
}

impl ExternalTools {
    /// Creates a backend that runs the given programs.
    #[must_use]
    pub fn new(tools: ToolPaths) -> Self {
        Self { tools }
    }

    fn program(&self, kind: ArchiveKind) -> &Path {
        match kind {
            ArchiveKind::Zip => &self.tools.unzip,
            ArchiveKind::Tar => &self.tools.tar,
        }
    }

    /// Builds the read-only listing command for `archive`.
    #[must_use]
    pub fn list_command(&self, archive: &ArchiveRef) -> Command {
        let mut command = Command::new(self.program(archive.kind()));
        match archive.kind() {
            ArchiveKind::Zip => command.arg("-l"),
            ArchiveKind::Tar => command.arg("-taf"),
        };
        command.arg(archive.path());
        command
    }

    /// Builds the command that extracts `archive` into `destination`.
    #[must_use]
    pub fn extract_command(&self, archive: &ArchiveRef, destination: &Path) -> Command {
        let mut command = Command::new(self.program(archive.kind()));
        match archive.kind() {
            ArchiveKind::Zip => command.arg("-d").arg(destination),
            // Reading tar detects gzip or bzip2 from the content; -a only matters when creating.
            ArchiveKind::Tar => command.arg("--directory").arg(destination).arg("-xaf"),
        };
        command.arg(archive.path());
        command
    }
}

impl ArchiveBackend for ExternalTools {
    fn name(&self) -> &'static str {
        "external"
    }

    fn list(&self, archive: &ArchiveRef) -> Result<Vec<String>> {
        let program = self.program(archive.kind()).display().to_string();
        let mut command = self.list_command(archive);
        debug!(?command, "listing archive");

        let output = command
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| UnpackError::listing(archive.path(), format!("failed to run {program}: {e}")))?;

        if !output.status.success() {
            return Err(UnpackError::listing(
                archive.path(),
                format!("{program} exited with {}", output.status),
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let entries = match archive.kind() {
            ArchiveKind::Zip => parse_zip_listing(&stdout),
            ArchiveKind::Tar => parse_tar_listing(&stdout),
        };
        debug!(entries = entries.len(), "listing parsed");
        Ok(entries)
    }

    fn extract(
        &self,
        archive: &ArchiveRef,
        destination: &Path,
        _observer: &mut dyn UnpackObserver,
    ) -> Result<usize> {
        let program = self.program(archive.kind()).display().to_string();
        let mut command = self.extract_command(archive, destination);
        debug!(?command, "extracting archive");

        let status = command.status().map_err(|e| {
            UnpackError::extraction(archive.path(), format!("failed to run {program}: {e}"))
        })?;

        if !status.success() {
            return Err(UnpackError::extraction(
                archive.path(),
                format!("{program} exited with {status}"),
            ));
        }

        Ok(0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::NoopObserver;
    use std::ffi::OsStr;
    use std::path::PathBuf;

    fn args(command: &Command) -> Vec<&OsStr> {
        command.get_args().collect()
    }

    #[test]
    fn test_zip_commands() {
        let tools = ExternalTools::default();
        let archive = ArchiveRef::new_unchecked(PathBuf::from("foo.zip"), ArchiveKind::Zip);

        let list = tools.list_command(&archive);
        assert_eq!(list.get_program(), "unzip");
        assert_eq!(args(&list), ["-l", "foo.zip"]);

        let extract = tools.extract_command(&archive, Path::new("/tmp/foo"));
        assert_eq!(extract.get_program(), "unzip");
        assert_eq!(args(&extract), ["-d", "/tmp/foo", "foo.zip"]);
    }

    #[test]
    fn test_tar_commands() {
        let tools = ExternalTools::default();
        let archive = ArchiveRef::new_unchecked(PathBuf::from("foo.tar.gz"), ArchiveKind::Tar);

        let list = tools.list_command(&archive);
        assert_eq!(list.get_program(), "tar");
        assert_eq!(args(&list), ["-taf", "foo.tar.gz"]);

        let extract = tools.extract_command(&archive, Path::new("/tmp"));
        assert_eq!(args(&extract), ["--directory", "/tmp", "-xaf", "foo.tar.gz"]);
    }

    #[test]
    fn test_custom_programs() {
        let tools = ExternalTools::new(ToolPaths {
            unzip: PathBuf::from("/opt/bin/unzip"),
            tar: PathBuf::from("gtar"),
        });
        let archive = ArchiveRef::new_unchecked(PathBuf::from("a.tbz"), ArchiveKind::Tar);
        assert_eq!(tools.list_command(&archive).get_program(), "gtar");
    }

    #[test]
    fn test_missing_program_is_listing_failure() {
        let tools = ExternalTools::new(ToolPaths {
            unzip: PathBuf::from("nestex-test-no-such-unzip"),
            tar: PathBuf::from("nestex-test-no-such-tar"),
        });
        let archive = ArchiveRef::new_unchecked(PathBuf::from("a.zip"), ArchiveKind::Zip);

        let err = tools.list(&archive).unwrap_err();
        assert!(matches!(err, UnpackError::ListingFailed { .. }));
        assert!(err.to_string().contains("nestex-test-no-such-unzip"));
    }

    #[test]
    fn test_missing_program_is_extraction_failure() {
        let tools = ExternalTools::new(ToolPaths {
            unzip: PathBuf::from("nestex-test-no-such-unzip"),
            tar: PathBuf::from("nestex-test-no-such-tar"),
        });
        let archive = ArchiveRef::new_unchecked(PathBuf::from("a.tar"), ArchiveKind::Tar);

        let err = tools
            .extract(&archive, Path::new("."), &mut NoopObserver)
            .unwrap_err();
        assert!(matches!(err, UnpackError::ExtractionFailed { .. }));
    }
}
