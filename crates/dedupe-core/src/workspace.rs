use serde::Deserialize;
use std::path::{Path, PathBuf};

use dedupe_util::errors::DedupeError;

/// Parsed workspace descriptor (`sfdx-project.json`).
///
/// Only `packageDirectories` is read; every other key is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceDescriptor {
    #[serde(default)]
    pub package_directories: Vec<PackageDirectory>,
}

/// One entry of `packageDirectories`.
#[derive(Debug, Clone, Deserialize)]
pub struct PackageDirectory {
    /// Directory of the package, relative to the workspace root.
    pub path: String,
    #[serde(default)]
    pub package: Option<String>,
    #[serde(default)]
    pub default: bool,
    #[serde(default)]
    pub dependencies: Vec<PackageDependency>,
}

impl PackageDirectory {
    /// Logical name of the package. Entries without `package` are named by their path.
    pub fn name(&self) -> &str {
        self.package.as_deref().unwrap_or(&self.path)
    }
}

/// A declared dependency on another package: `{"package": "name@1.2.0-1"}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDependency {
    pub package: String,
    #[serde(default)]
    pub version_number: Option<String>,
}

impl PackageDependency {
    /// The package name without any `@version` suffix.
    ///
    /// A leading `@` (scoped name) is part of the name, not a version separator.
    pub fn package_name(&self) -> &str {
        let mut chars = self.package.char_indices().skip(1);
        match chars.find(|&(_, c)| c == '@') {
            Some((idx, _)) => &self.package[..idx],
            None => &self.package,
        }
    }
}

/// A loaded workspace: the descriptor plus the root it was read from.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root_dir: PathBuf,
    pub descriptor_path: PathBuf,
    pub packages: Vec<PackageDirectory>,
}

impl Workspace {
    /// Load the descriptor at `root/descriptor`.
    pub fn load(root: &Path, descriptor: &str) -> Result<Self, DedupeError> {
        let descriptor_path = root.join(descriptor);
        if !descriptor_path.is_file() {
            return Err(DedupeError::MissingDescriptor {
                path: descriptor_path,
            });
        }
        let content = std::fs::read_to_string(&descriptor_path)?;
        let parsed: WorkspaceDescriptor =
            serde_json::from_str(&content).map_err(|e| DedupeError::Manifest {
                message: format!("Failed to parse {}: {e}", descriptor_path.display()),
            })?;

        tracing::debug!(
            "loaded {} package directories from {}",
            parsed.package_directories.len(),
            descriptor_path.display()
        );

        Ok(Self {
            root_dir: root.to_path_buf(),
            descriptor_path,
            packages: parsed.package_directories,
        })
    }

    /// Returns the single package marked `default`.
    ///
    /// Zero or several defaults are both rejected.
    pub fn default_package(&self) -> Result<&PackageDirectory, DedupeError> {
        let defaults: Vec<&PackageDirectory> =
            self.packages.iter().filter(|p| p.default).collect();
        match defaults.as_slice() {
            [single] => Ok(*single),
            [] => Err(DedupeError::NoDefaultPackage {
                reason: format!(
                    "none of {} package directories in {} is marked default",
                    self.packages.len(),
                    self.descriptor_path.display()
                ),
            }),
            many => Err(DedupeError::NoDefaultPackage {
                reason: format!(
                    "{} package directories are marked default ({})",
                    many.len(),
                    many.iter().map(|p| p.name()).collect::<Vec<_>>().join(", ")
                ),
            }),
        }
    }

    /// Packages the default package declares as dependencies, in descriptor order.
    pub fn default_dependencies(&self) -> Result<Vec<&PackageDirectory>, DedupeError> {
        let default = self.default_package()?;
        let declared: Vec<&str> = default
            .dependencies
            .iter()
            .map(PackageDependency::package_name)
            .collect();
        Ok(self
            .packages
            .iter()
            .filter(|p| declared.contains(&p.name()))
            .collect())
    }

    /// Absolute directory of a package.
    pub fn package_dir(&self, package: &PackageDirectory) -> PathBuf {
        self.root_dir.join(&package.path)
    }
}
