//! Grouping of installations by dependency name.

use std::collections::BTreeMap;

use dedupe_core::record::InstalledDependency;

/// Every installation of one dependency name across the workspace.
#[derive(Debug, Clone)]
pub struct DependencyGroup {
    pub name: String,
    /// Installations in scan order.
    pub installs: Vec<InstalledDependency>,
}

impl DependencyGroup {
    /// Distinct packages holding this dependency, in scan order.
    pub fn packages(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for install in &self.installs {
            if !seen.contains(&install.package.as_str()) {
                seen.push(&install.package);
            }
        }
        seen
    }

    /// Returns `true` if more than one package holds this dependency.
    pub fn is_shared(&self) -> bool {
        self.packages().len() > 1
    }

    /// Returns `true` if `package` holds at least one installation.
    pub fn held_by(&self, package: &str) -> bool {
        self.installs.iter().any(|i| i.package == package)
    }
}

/// All dependency groups, keyed and iterated by name.
#[derive(Debug, Default)]
pub struct DependencyIndex {
    groups: BTreeMap<String, DependencyGroup>,
}

impl DependencyIndex {
    /// Fold installation records into groups.
    pub fn from_records(records: impl IntoIterator<Item = InstalledDependency>) -> Self {
        let mut groups: BTreeMap<String, DependencyGroup> = BTreeMap::new();
        for record in records {
            groups
                .entry(record.name.clone())
                .or_insert_with(|| DependencyGroup {
                    name: record.name.clone(),
                    installs: Vec::new(),
                })
                .installs
                .push(record);
        }
        Self { groups }
    }

    /// Number of distinct dependency names.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&DependencyGroup> {
        self.groups.get(name)
    }

    /// All groups, ordered by name.
    pub fn groups(&self) -> impl Iterator<Item = &DependencyGroup> {
        self.groups.values()
    }

    /// Groups held by more than one package, ordered by name.
    pub fn shared(&self) -> impl Iterator<Item = &DependencyGroup> {
        self.groups.values().filter(|g| g.is_shared())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::path::PathBuf;

    pub(crate) fn install(name: &str, package: &str, version: &str) -> InstalledDependency {
        nested_install(name, package, version, name)
    }

    pub(crate) fn nested_install(
        name: &str,
        package: &str,
        version: &str,
        relative: &str,
    ) -> InstalledDependency {
        InstalledDependency {
            name: name.to_string(),
            package: package.to_string(),
            version: version.to_string(),
            path: PathBuf::from("/ws")
                .join(package)
                .join("node_modules")
                .join(relative),
            relative_path: PathBuf::from(relative),
        }
    }

    #[test]
    fn groups_by_name_in_scan_order() {
        let index = DependencyIndex::from_records(vec![
            install("lodash", "b", "4.17.0"),
            install("chalk", "a", "5.0.0"),
            install("lodash", "a", "4.17.0"),
        ]);
        assert_eq!(index.len(), 2);
        let names: Vec<&str> = index.groups().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["chalk", "lodash"]);
        let lodash = index.get("lodash").unwrap();
        assert_eq!(lodash.packages(), vec!["b", "a"]);
        assert!(lodash.is_shared());
        assert!(!index.get("chalk").unwrap().is_shared());
    }

    #[test]
    fn nested_copies_in_one_package_still_validated() {
        let index = DependencyIndex::from_records(vec![
            install("ms", "a", "2.1.3"),
            nested_install("ms", "a", "2.0.0", "debug/node_modules/ms"),
        ]);
        let group = index.get("ms").unwrap();
        assert_eq!(group.installs.len(), 2);
        assert_eq!(group.packages(), vec!["a"]);
        assert!(!group.is_shared());
        assert_eq!(index.shared().count(), 0);
        assert!(matches!(
            crate::validate::validate(&index),
            Err(dedupe_util::errors::DedupeError::VersionMismatch { .. })
        ));
    }

    #[test]
    fn empty_index() {
        let index = DependencyIndex::from_records(Vec::new());
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
    }
}
