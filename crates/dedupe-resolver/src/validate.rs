//! Version agreement checks across every installation of a dependency.

use std::fmt;

use dedupe_core::record::InstalledDependency;
use dedupe_util::errors::DedupeError;

use crate::aggregate::{DependencyGroup, DependencyIndex};

/// A dependency whose installations disagree on version.
#[derive(Debug, Clone)]
pub struct VersionMismatch {
    pub dependency: String,
    pub installs: Vec<InstalledDependency>,
}

impl VersionMismatch {
    /// One `<package>: <version> (<relative path>)` line per installation.
    pub fn details(&self) -> String {
        self.installs
            .iter()
            .map(|i| format!("  {i}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<VersionMismatch> for DedupeError {
    fn from(mismatch: VersionMismatch) -> Self {
        DedupeError::VersionMismatch {
            details: mismatch.details(),
            dependency: mismatch.dependency,
        }
    }
}

impl fmt::Display for VersionMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.dependency)?;
        write!(f, "{}", self.details())
    }
}

/// Compare every installation of a group against the first one.
///
/// Applies to any group with two or more installations, including nested
/// copies inside a single package.
pub fn check_group(group: &DependencyGroup) -> Option<VersionMismatch> {
    if group.installs.len() < 2 {
        return None;
    }
    let first = &group.installs.first()?.version;
    if group.installs.iter().all(|i| &i.version == first) {
        return None;
    }
    Some(VersionMismatch {
        dependency: group.name.clone(),
        installs: group.installs.clone(),
    })
}

/// Every mismatch in the index, ordered by dependency name.
pub fn find_mismatches(index: &DependencyIndex) -> Vec<VersionMismatch> {
    index.groups().filter_map(check_group).collect()
}

/// Fail on the first mismatch found.
pub fn validate(index: &DependencyIndex) -> Result<(), DedupeError> {
    match index.groups().find_map(check_group) {
        Some(mismatch) => Err(mismatch.into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::tests::{install, nested_install};

    #[test]
    fn matching_versions_pass() {
        let index = DependencyIndex::from_records(vec![
            install("lodash", "a", "4.17.0"),
            install("lodash", "b", "4.17.0"),
        ]);
        assert!(validate(&index).is_ok());
        assert!(find_mismatches(&index).is_empty());
    }

    #[test]
    fn mismatch_lists_every_install() {
        let index = DependencyIndex::from_records(vec![
            install("lodash", "pkg-a", "4.17.0"),
            install("lodash", "pkg-b", "4.16.0"),
        ]);
        let err = validate(&index).unwrap_err();
        match err {
            DedupeError::VersionMismatch {
                dependency,
                details,
            } => {
                assert_eq!(dependency, "lodash");
                assert_eq!(
                    details,
                    "  pkg-a: 4.17.0 (lodash)\n  pkg-b: 4.16.0 (lodash)"
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn nested_versions_in_one_package_mismatch() {
        let index = DependencyIndex::from_records(vec![
            install("ms", "a", "2.1.3"),
            nested_install("ms", "a", "2.0.0", "debug/node_modules/ms"),
        ]);
        match validate(&index).unwrap_err() {
            DedupeError::VersionMismatch {
                dependency,
                details,
            } => {
                assert_eq!(dependency, "ms");
                assert_eq!(
                    details,
                    "  a: 2.1.3 (ms)\n  a: 2.0.0 (debug/node_modules/ms)"
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn single_install_never_mismatches() {
        let index = DependencyIndex::from_records(vec![
            install("ms", "a", "2.1.3"),
            install("chalk", "b", "5.0.0"),
        ]);
        assert!(validate(&index).is_ok());
        assert!(find_mismatches(&index).is_empty());
    }

    #[test]
    fn nested_copy_in_shared_group_is_compared() {
        let index = DependencyIndex::from_records(vec![
            install("ms", "a", "2.1.3"),
            nested_install("ms", "a", "2.0.0", "debug/node_modules/ms"),
            install("ms", "b", "2.1.3"),
        ]);
        let mismatches = find_mismatches(&index);
        assert_eq!(mismatches.len(), 1);
        assert!(mismatches[0]
            .details()
            .contains("a: 2.0.0 (debug/node_modules/ms)"));
    }

    #[test]
    fn find_mismatches_collects_all() {
        let index = DependencyIndex::from_records(vec![
            install("zod", "a", "3.0.0"),
            install("zod", "b", "3.1.0"),
            install("chalk", "a", "5.0.0"),
            install("chalk", "b", "4.1.2"),
            install("ok", "a", "1.0.0"),
            install("ok", "b", "1.0.0"),
        ]);
        let names: Vec<String> = find_mismatches(&index)
            .into_iter()
            .map(|m| m.dependency)
            .collect();
        assert_eq!(names, vec!["chalk", "zod"]);
        match validate(&index).unwrap_err() {
            DedupeError::VersionMismatch { dependency, .. } => assert_eq!(dependency, "chalk"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
