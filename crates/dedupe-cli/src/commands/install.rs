//! Handler for `dedupe install`.

use std::path::Path;

use miette::Result;

use dedupe_core::config::DedupeConfig;
use dedupe_ops::ops_dedupe::{self, DedupeOptions};
use dedupe_ops::ops_install;
use dedupe_util::progress;

use crate::sink::StatusSink;

pub fn exec(root: &Path, config: &DedupeConfig, no_dedupe: bool) -> Result<()> {
    let mut spinner = None;
    let result = ops_install::install(root, config, &StatusSink, |name| {
        let previous = spinner.replace(progress::spinner(&format!("Installing {name}")));
        if let Some(pb) = previous {
            pb.finish_and_clear();
        }
    });
    if let Some(pb) = spinner.take() {
        pb.finish_and_clear();
    }
    let count = result?;
    println!("Installed {count} packages");

    if no_dedupe {
        return Ok(());
    }

    let summary = ops_dedupe::dedupe(root, config, &DedupeOptions::default(), &StatusSink)?;
    println!(
        "{} dependencies installed, {} redundant installations removed",
        summary.install_total, summary.removed_total
    );
    Ok(())
}
