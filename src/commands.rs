//! CLI command definitions
//!
//! Defines the clap commands for the harness CLI.

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the built-in scenarios against the example binaries
    Run {
        /// Directory holding the target binaries (default: `examples/` next to argcheck)
        #[arg(long)]
        examples_dir: Option<PathBuf>,

        /// Only run these targets (can be repeated); registration order is kept
        #[arg(long = "target", short = 't')]
        targets: Vec<String>,

        /// Print every passing scenario
        #[arg(long, short)]
        verbose: bool,

        /// Print the summary as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Execute the scenarios defined in a YAML suite file
    Test {
        /// Path to the YAML suite file
        path: PathBuf,

        /// Directory holding the target binaries (overrides the suite file)
        #[arg(long)]
        examples_dir: Option<PathBuf>,

        /// Print every passing scenario
        #[arg(long, short)]
        verbose: bool,

        /// Print the summary as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List registered targets and their scenarios
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Whether verbose output was requested
    pub fn verbose(&self) -> bool {
        match self {
            Commands::Run { verbose, .. } | Commands::Test { verbose, .. } => *verbose,
            Commands::List { .. } => false,
        }
    }
}
