//! CLI argument definitions for dedupe.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "dedupe",
    version,
    about = "Remove redundant dependency installations across workspace packages",
    long_about = "dedupe scans the install root of every package listed in the workspace \
                  descriptor, checks that packages sharing a dependency agree on its version, \
                  and keeps a single copy: in the default package if it has one, otherwise in \
                  the first package the default package depends on."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Workspace root (defaults to the nearest ancestor holding the descriptor)
    #[arg(long, global = true, env = "DEDUPE_ROOT")]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Remove redundant installations
    Run {
        /// Show what would be removed without deleting anything
        #[arg(long)]
        dry_run: bool,
        /// Print the summary as JSON on stdout
        #[arg(long)]
        json: bool,
    },

    /// List dependencies installed in more than one package
    Report,

    /// Run the package manager in every package, then deduplicate
    Install {
        /// Skip deduplication after installing
        #[arg(long)]
        no_dedupe: bool,
    },
}

/// Parse CLI arguments from `std::env::args`.
pub fn parse() -> Cli {
    Cli::parse()
}
