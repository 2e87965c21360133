use std::fmt;
use std::path::PathBuf;

/// One physical installation of a dependency, found while scanning a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledDependency {
    /// Dependency name as declared in its own manifest.
    pub name: String,
    /// Logical name of the package directory the installation lives under.
    pub package: String,
    /// Declared version string.
    pub version: String,
    /// Absolute path of the installation directory.
    pub path: PathBuf,
    /// Path of the installation directory relative to the package's install root.
    pub relative_path: PathBuf,
}

impl fmt::Display for InstalledDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({})",
            self.package,
            self.version,
            self.relative_path.display()
        )
    }
}
