//! Operation: list shared dependencies without touching the filesystem.

use std::fmt;
use std::path::Path;

use dedupe_core::config::DedupeConfig;
use dedupe_core::record::InstalledDependency;
use dedupe_resolver::engine::Deduplicator;
use dedupe_resolver::validate::{self, VersionMismatch};
use dedupe_util::log::LogSink;

/// A dependency installed in more than one package.
#[derive(Debug, Clone)]
pub struct SharedDependency {
    pub name: String,
    /// Distinct holding packages, in scan order.
    pub holders: Vec<String>,
    pub installs: Vec<InstalledDependency>,
    /// Package that would keep its copy, if any.
    pub owner: Option<String>,
    /// Installations disagree on version.
    pub mismatched: bool,
}

/// Every shared dependency of a workspace, ordered by name.
#[derive(Debug, Default)]
pub struct DuplicateReport {
    /// Distinct dependency names across all packages.
    pub install_total: usize,
    pub shared: Vec<SharedDependency>,
    mismatches: Vec<VersionMismatch>,
    removable: usize,
}

impl DuplicateReport {
    /// Every version mismatch, shared or not, ordered by name.
    pub fn mismatches(&self) -> &[VersionMismatch] {
        &self.mismatches
    }

    /// Installations that a run would remove. Zero while any mismatch remains.
    pub fn removable(&self) -> usize {
        self.removable
    }
}

impl fmt::Display for DuplicateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.shared.is_empty() {
            writeln!(
                f,
                "No shared dependencies ({} dependencies installed).",
                self.install_total
            )?;
        } else {
            writeln!(
                f,
                "Shared dependencies ({} of {}):",
                self.shared.len(),
                self.install_total
            )?;
            for s in &self.shared {
                let owner = s.owner.as_deref().unwrap_or("none");
                let flag = if s.mismatched { " [version mismatch]" } else { "" };
                writeln!(f, "  {} (owner: {owner}){flag}", s.name)?;
                for install in &s.installs {
                    writeln!(f, "    {install}")?;
                }
            }
        }

        let local: Vec<&VersionMismatch> = self
            .mismatches
            .iter()
            .filter(|m| !self.shared.iter().any(|s| s.name == m.dependency))
            .collect();
        if !local.is_empty() {
            writeln!(f, "Version mismatches within one package:")?;
            for mismatch in local {
                writeln!(f, "  {}:", mismatch.dependency)?;
                for install in &mismatch.installs {
                    writeln!(f, "    {install}")?;
                }
            }
        }
        Ok(())
    }
}

/// Scan the workspace and describe every shared dependency.
pub fn report(
    root: &Path,
    config: &DedupeConfig,
    sink: &dyn LogSink,
) -> miette::Result<DuplicateReport> {
    let dedupe = Deduplicator::new(root, config.clone(), sink);
    let analysis = dedupe.analyze()?;

    let shared = analysis
        .index
        .shared()
        .map(|group| SharedDependency {
            name: group.name.clone(),
            holders: group.packages().into_iter().map(str::to_string).collect(),
            installs: group.installs.clone(),
            owner: analysis.policy.select(group).map(str::to_string),
            mismatched: validate::check_group(group).is_some(),
        })
        .collect();

    let mismatches = validate::find_mismatches(&analysis.index);
    let removable = if mismatches.is_empty() {
        dedupe.plan(&analysis)?.len()
    } else {
        0
    };

    Ok(DuplicateReport {
        install_total: analysis.index.len(),
        shared,
        mismatches,
        removable,
    })
}
