//! Handler for `dedupe run`.

use std::path::Path;

use miette::Result;

use dedupe_core::config::DedupeConfig;
use dedupe_ops::ops_dedupe::{self, DedupeOptions};
use dedupe_util::errors::DedupeError;

use crate::sink::StatusSink;

pub fn exec(root: &Path, config: &DedupeConfig, dry_run: bool, json: bool) -> Result<()> {
    let summary = ops_dedupe::dedupe(root, config, &DedupeOptions { dry_run }, &StatusSink)?;

    if json {
        let out = serde_json::to_string_pretty(&summary).map_err(|e| DedupeError::Generic {
            message: format!("Failed to serialize summary: {e}"),
        })?;
        println!("{out}");
    } else if dry_run {
        println!(
            "{} dependencies installed, {} redundant installations would be removed",
            summary.install_total, summary.removed_total
        );
    } else {
        println!(
            "{} dependencies installed, {} redundant installations removed",
            summary.install_total, summary.removed_total
        );
    }
    Ok(())
}
