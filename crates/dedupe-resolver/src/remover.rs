//! Removal planning and execution.

use std::fs;
use std::path::{Path, PathBuf};

use dedupe_core::workspace::Workspace;
use dedupe_util::errors::DedupeError;
use dedupe_util::fs::{is_plain_relative, remove_tree};
use dedupe_util::log::LogSink;

use crate::aggregate::DependencyIndex;
use crate::owner::OwnerPolicy;

/// One redundant installation scheduled for deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    pub dependency: String,
    /// Package losing its copy.
    pub package: String,
    /// Package keeping its copy.
    pub owner: String,
    /// `<package dir>/<install dir>/<dependency>`.
    pub path: PathBuf,
}

/// Everything the remover will do, decided before anything is deleted.
#[derive(Debug, Default)]
pub struct RemovalPlan {
    pub removals: Vec<Removal>,
    /// Losing packages that hold the dependency only nested, so there is no
    /// top-level directory to delete.
    pub absent: Vec<Removal>,
    /// Shared dependencies for which no owner could be chosen.
    pub unowned: Vec<String>,
}

impl RemovalPlan {
    pub fn len(&self) -> usize {
        self.removals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.removals.is_empty()
    }
}

/// Decide, for every shared dependency, which copies go.
///
/// Each losing package appears once per dependency, however many nested
/// copies it holds. Targets missing on disk go to `absent` instead of
/// `removals`, so the plan length is what a real run deletes.
pub fn plan(
    workspace: &Workspace,
    index: &DependencyIndex,
    policy: &OwnerPolicy,
    install_dir: &str,
    sink: &dyn LogSink,
) -> RemovalPlan {
    let mut plan = RemovalPlan::default();

    for group in index.shared() {
        let Some(owner) = policy.select(group) else {
            sink.info(
                "Ignoring",
                format!(
                    "{}: neither {} nor its dependencies hold it",
                    group.name,
                    policy.default_package()
                ),
            );
            plan.unowned.push(group.name.clone());
            continue;
        };

        if !is_plain_relative(Path::new(&group.name)) {
            sink.warn(
                "Skipping",
                format!("{}: not a safe directory name", group.name),
            );
            continue;
        }

        for package in group.packages().into_iter().filter(|p| *p != owner) {
            let Some(entry) = workspace.packages.iter().find(|p| p.name() == package) else {
                continue;
            };
            let removal = Removal {
                dependency: group.name.clone(),
                package: package.to_string(),
                owner: owner.to_string(),
                path: workspace
                    .package_dir(entry)
                    .join(install_dir)
                    .join(&group.name),
            };
            if fs::symlink_metadata(&removal.path).is_ok() {
                plan.removals.push(removal);
            } else {
                sink.debug(
                    "Skipping",
                    format!(
                        "{} from {}: only nested copies, nothing at {}",
                        removal.dependency,
                        removal.package,
                        removal.path.display()
                    ),
                );
                plan.absent.push(removal);
            }
        }
    }

    plan
}

/// Delete every planned installation, returning how many were removed.
///
/// Stops at the first failure; earlier deletions are not rolled back.
pub fn execute(plan: &RemovalPlan, sink: &dyn LogSink) -> Result<usize, DedupeError> {
    let mut removed = 0;
    for removal in &plan.removals {
        if remove_tree(&removal.path)? {
            sink.info(
                "Removing",
                format!(
                    "{} from {} (kept in {})",
                    removal.dependency, removal.package, removal.owner
                ),
            );
            removed += 1;
        } else {
            sink.debug(
                "Skipping",
                format!(
                    "{} from {}: {} is already gone",
                    removal.dependency,
                    removal.package,
                    removal.path.display()
                ),
            );
        }
    }
    Ok(removed)
}
