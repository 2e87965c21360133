//! Operation: remove redundant dependency installations.

use std::path::Path;

use dedupe_core::config::DedupeConfig;
use dedupe_resolver::engine::{DedupeSummary, Deduplicator};
use dedupe_util::log::LogSink;

/// Options for `dedupe run`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DedupeOptions {
    /// Plan only; delete nothing.
    pub dry_run: bool,
}

/// Run the deduplication engine over the workspace at `root`.
pub fn dedupe(
    root: &Path,
    config: &DedupeConfig,
    opts: &DedupeOptions,
    sink: &dyn LogSink,
) -> miette::Result<DedupeSummary> {
    let summary = Deduplicator::new(root, config.clone(), sink).run(opts.dry_run)?;
    Ok(summary)
}
