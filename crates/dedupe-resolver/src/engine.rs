//! The end-to-end deduplication pipeline.

use std::path::PathBuf;

use serde::Serialize;

use dedupe_core::config::DedupeConfig;
use dedupe_core::workspace::Workspace;
use dedupe_util::errors::DedupeError;
use dedupe_util::log::LogSink;

use crate::aggregate::DependencyIndex;
use crate::owner::OwnerPolicy;
use crate::remover::{self, RemovalPlan};
use crate::scanner::Scanner;
use crate::validate;

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DedupeSummary {
    /// Distinct dependency names found across all packages.
    pub install_total: usize,
    /// Installations removed (or, in a dry run, that would be removed).
    pub removed_total: usize,
    pub dry_run: bool,
}

/// The scanned state of a workspace, before any validation.
#[derive(Debug)]
pub struct Analysis {
    pub workspace: Workspace,
    pub policy: OwnerPolicy,
    pub index: DependencyIndex,
}

/// Runs workspace loading, scanning, grouping, validation and removal.
pub struct Deduplicator<'a> {
    root: PathBuf,
    config: DedupeConfig,
    sink: &'a dyn LogSink,
}

impl<'a> Deduplicator<'a> {
    pub fn new(root: impl Into<PathBuf>, config: DedupeConfig, sink: &'a dyn LogSink) -> Self {
        Self {
            root: root.into(),
            config,
            sink,
        }
    }

    /// Load the workspace and scan every package. Read-only.
    pub fn analyze(&self) -> Result<Analysis, DedupeError> {
        let workspace = Workspace::load(&self.root, &self.config.descriptor)?;
        let policy = OwnerPolicy::from_workspace(&workspace)?;

        let scanner = Scanner::new(&self.config.install_dir, &self.config.manifest, self.sink);
        let records = scanner.scan_workspace(&workspace)?;
        let index = DependencyIndex::from_records(records);

        Ok(Analysis {
            workspace,
            policy,
            index,
        })
    }

    /// Validate the analysis and build the removal plan. Read-only.
    pub fn plan(&self, analysis: &Analysis) -> Result<RemovalPlan, DedupeError> {
        validate::validate(&analysis.index)?;
        Ok(remover::plan(
            &analysis.workspace,
            &analysis.index,
            &analysis.policy,
            &self.config.install_dir,
            self.sink,
        ))
    }

    /// Run the full pipeline. With `dry_run` nothing is deleted.
    pub fn run(&self, dry_run: bool) -> Result<DedupeSummary, DedupeError> {
        let analysis = self.analyze()?;
        let plan = self.plan(&analysis)?;

        let removed_total = if dry_run {
            for removal in &plan.removals {
                self.sink.info(
                    "Would remove",
                    format!(
                        "{} from {} (kept in {})",
                        removal.dependency, removal.package, removal.owner
                    ),
                );
            }
            plan.len()
        } else {
            remover::execute(&plan, self.sink)?
        };

        let summary = DedupeSummary {
            install_total: analysis.index.len(),
            removed_total,
            dry_run,
        };
        self.sink.info(
            "Finished",
            format!(
                "{} dependencies found, {} {}",
                summary.install_total,
                summary.removed_total,
                if dry_run { "removable" } else { "removed" }
            ),
        );
        Ok(summary)
    }
}
