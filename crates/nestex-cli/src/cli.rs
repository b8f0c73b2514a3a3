//! CLI argument parsing using clap.

use clap::ArgAction;
use clap::Parser;
use clap::ValueEnum;
use clap_complete::Shell;
use nestex_core::BackendKind;
use nestex_core::ToolPaths;
use nestex_core::UnpackConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nestex")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the archive file
    #[arg(value_name = "SOURCE", required_unless_present = "completions")]
    pub source: Option<PathBuf>,

    /// Directory to extract into (default: current directory)
    #[arg(value_name = "DESTINATION")]
    pub destination: Option<PathBuf>,

    /// How archives are listed and extracted
    #[arg(long, value_enum, default_value_t = Backend::External, env = "NESTEX_BACKEND")]
    pub backend: Backend,

    /// Program used for zip archives by the external backend
    #[arg(long, value_name = "PROGRAM", default_value = "unzip", env = "NESTEX_UNZIP")]
    pub unzip: PathBuf,

    /// Program used for tar archives by the external backend
    #[arg(long, value_name = "PROGRAM", default_value = "tar", env = "NESTEX_TAR")]
    pub tar: PathBuf,

    /// Show where the archive would go without extracting it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long)]
    pub json: bool,

    /// Print a completion script for the given shell and exit
    #[arg(long, value_name = "SHELL", exclusive = true)]
    pub completions: Option<Shell>,
}

/// Backend choices on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Run the system's unzip and tar
    External,
    /// Read archives in-process
    Native,
}

impl From<Backend> for BackendKind {
    fn from(backend: Backend) -> Self {
        match backend {
            Backend::External => Self::External,
            Backend::Native => Self::Native,
        }
    }
}

impl Cli {
    /// Builds the core configuration from the parsed arguments.
    pub fn unpack_config(&self) -> UnpackConfig {
        UnpackConfig {
            backend: self.backend.into(),
            tools: ToolPaths {
                unzip: self.unzip.clone(),
                tar: self.tar.clone(),
            },
        }
    }
}
