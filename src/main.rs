//! argcheck - black-box acceptance harness for argument-parsing CLIs
//!
//! Runs scenarios against pre-built example binaries and exits non-zero on
//! the first one that does not behave as expected.

use std::path::PathBuf;

use argcheck::{cli, commands, common::logging};
use clap::Parser;
use commands::Commands;

#[derive(Parser)]
#[command(name = "argcheck", about = "Acceptance tests for argument-parsing CLIs")]
#[command(version, long_about = None)]
struct Cli {
    /// Configuration file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    logging::init_cli(cli.command.verbose());

    if let Err(e) = cli::dispatch(cli.command, cli.config.as_deref()).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
