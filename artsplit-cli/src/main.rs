//! artsplit command-line entry point

use anyhow::Result;
use artsplit_cli::commands::Commands;
use clap::Parser;

/// Split a delimited text stream into one file per article
#[derive(Debug, Parser)]
#[command(name = "artsplit", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
