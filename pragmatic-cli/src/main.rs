//! `pragmatic` command-line entry point

use anyhow::Result;
use clap::Parser;
use pragmatic_cli::commands::Commands;

/// Rule-based sentence boundary detection
#[derive(Debug, Parser)]
#[command(name = "pragmatic", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    Cli::parse().command.execute()
}
