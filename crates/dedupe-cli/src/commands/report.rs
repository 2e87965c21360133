//! Handler for `dedupe report`.

use std::path::Path;

use miette::Result;

use dedupe_core::config::DedupeConfig;
use dedupe_ops::ops_report;

use crate::sink::StatusSink;

pub fn exec(root: &Path, config: &DedupeConfig) -> Result<()> {
    let report = ops_report::report(root, config, &StatusSink)?;
    print!("{report}");

    let mismatches = report.mismatches().len();
    if mismatches > 0 {
        println!("{mismatches} version mismatches must be resolved before deduplicating.");
    } else {
        println!("{} redundant installations can be removed.", report.removable());
    }
    Ok(())
}
