use serde::Deserialize;
use std::path::Path;

use dedupe_util::errors::DedupeError;

/// The fields of an installed dependency's `package.json` the engine relies on.
///
/// Every other key in the file is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
}

impl PackageManifest {
    /// Load and parse a manifest from the given path.
    pub fn from_path(path: &Path) -> Result<Self, DedupeError> {
        let content = std::fs::read_to_string(path).map_err(|e| DedupeError::Manifest {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::from_json(&content).map_err(|e| DedupeError::Manifest {
            message: format!("{}: {e}", path.display()),
        })
    }

    /// Parse a manifest from a JSON string.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}
