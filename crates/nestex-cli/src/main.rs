//! nestex - extract an archive, keeping its contents under one top-level
//! directory.

mod cli;
mod commands;
mod error;
mod logging;
mod output;
mod progress;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    if let Some(shell) = cli.completions {
        commands::completion::execute(shell);
        return Ok(());
    }

    logging::init(cli.verbose);
    let formatter = output::create_formatter(&cli);

    let Some(source) = cli.source.as_deref() else {
        anyhow::bail!("missing archive path");
    };
    commands::extract::execute(&cli, source, &*formatter)
}
