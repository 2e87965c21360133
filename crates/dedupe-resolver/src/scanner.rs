//! Install-root traversal.

use std::ffi::OsStr;
use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use dedupe_core::manifest::PackageManifest;
use dedupe_core::record::InstalledDependency;
use dedupe_core::workspace::{PackageDirectory, Workspace};
use dedupe_util::errors::DedupeError;
use dedupe_util::log::LogSink;

/// Finds installed dependency manifests under a package's install root.
pub struct Scanner<'a> {
    install_dir: &'a str,
    manifest: &'a str,
    sink: &'a dyn LogSink,
}

impl<'a> Scanner<'a> {
    pub fn new(install_dir: &'a str, manifest: &'a str, sink: &'a dyn LogSink) -> Self {
        Self {
            install_dir,
            manifest,
            sink,
        }
    }

    /// Scan every package of the workspace, in descriptor order.
    pub fn scan_workspace(
        &self,
        workspace: &Workspace,
    ) -> Result<Vec<InstalledDependency>, DedupeError> {
        let mut records = Vec::new();
        for package in &workspace.packages {
            records.extend(self.scan_package(workspace, package)?);
        }
        Ok(records)
    }

    /// Walk one package's install root and return a record per manifest found.
    ///
    /// Every directory whose name has no `.` is descended into, whether or
    /// not its parent held a manifest. A missing install root is not an error.
    pub fn scan_package(
        &self,
        workspace: &Workspace,
        package: &PackageDirectory,
    ) -> Result<Vec<InstalledDependency>, DedupeError> {
        let install_root = workspace.package_dir(package).join(self.install_dir);
        if !install_root.is_dir() {
            self.sink.info(
                "Skipping",
                format!(
                    "{}: {} does not exist",
                    package.name(),
                    install_root.display()
                ),
            );
            return Ok(Vec::new());
        }

        self.sink.info(
            "Scanning",
            format!("{} ({})", package.name(), install_root.display()),
        );

        let walker = WalkDir::new(&install_root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || is_descendable(e));

        let mut records = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| DedupeError::Scan {
                message: format!("{}: {e}", install_root.display()),
            })?;
            let manifest_path = entry.path().join(self.manifest);
            if !manifest_path.is_file() {
                continue;
            }
            match PackageManifest::from_path(&manifest_path) {
                Ok(manifest) => {
                    records.push(record_for(package, &install_root, entry.path(), manifest))
                }
                Err(e) => self.sink.warn("Skipping", e.to_string()),
            }
        }

        tracing::debug!(
            "found {} installations under {}",
            records.len(),
            install_root.display()
        );
        Ok(records)
    }
}

fn is_descendable(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() && !has_dot(entry.file_name())
}

fn has_dot(name: &OsStr) -> bool {
    name.to_string_lossy().contains('.')
}

fn record_for(
    package: &PackageDirectory,
    install_root: &Path,
    dir: &Path,
    manifest: PackageManifest,
) -> InstalledDependency {
    let relative_path = dir
        .strip_prefix(install_root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| dir.to_path_buf());
    InstalledDependency {
        name: manifest.name,
        package: package.name().to_string(),
        version: manifest.version,
        path: dir.to_path_buf(),
        relative_path,
    }
}
