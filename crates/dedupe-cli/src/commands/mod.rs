//! Command dispatch and handler modules.

mod install;
mod report;
mod run;

use std::path::PathBuf;

use miette::Result;

use dedupe_core::config::DedupeConfig;
use dedupe_util::errors::DedupeError;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let (root, config) = workspace(cli.root.as_deref())?;
    match cli.command {
        Command::Run { dry_run, json } => run::exec(&root, &config, dry_run, json),
        Command::Report => report::exec(&root, &config),
        Command::Install { no_dedupe } => install::exec(&root, &config, no_dedupe),
    }
}

fn workspace(root: Option<&std::path::Path>) -> Result<(PathBuf, DedupeConfig)> {
    let cwd = std::env::current_dir().map_err(DedupeError::Io)?;
    dedupe_ops::locate(&cwd, root)
}
