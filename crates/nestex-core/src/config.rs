//! Unpacking configuration.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Which implementation lists and extracts archives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    /// Shell out to `unzip` and `tar`.
    #[default]
    External,
    /// Read archives in-process with the `zip` and `tar` crates.
    Native,
}

impl BackendKind {
    /// Returns the lowercase name used on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::External => "external",
            Self::Native => "native",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "external" => Ok(Self::External),
            "native" => Ok(Self::Native),
            other => Err(format!("unknown backend: {other}")),
        }
    }
}

/// Programs the external backend runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPaths {
    /// Program used for `-l` listing and `-d` extraction of zip archives.
    pub unzip: PathBuf,
    /// Program used for `-taf` listing and `-xaf` extraction of tar archives.
    pub tar: PathBuf,
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            unzip: PathBuf::from("unzip"),
            tar: PathBuf::from("tar"),
        }
    }
}

/// Configuration for an unpack run.
///
/// # Examples
///
/// ```
/// use nestex_core::BackendKind;
/// use nestex_core::UnpackConfig;
///
/// let config = UnpackConfig {
///     backend: BackendKind::Native,
///     ..Default::default()
/// };
/// assert_eq!(config.tools.tar.to_str(), Some("tar"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnpackConfig {
    /// Backend used for listing and extraction.
    pub backend: BackendKind,

    /// External programs, used only by [`BackendKind::External`].
    pub tools: ToolPaths,
}
