use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use dedupe_util::errors::DedupeError;

/// Name of the optional per-workspace configuration file.
pub const CONFIG_FILE: &str = ".dedupe.toml";

/// Workspace configuration loaded from `.dedupe.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DedupeConfig {
    /// Workspace descriptor path, relative to the workspace root.
    #[serde(default = "default_descriptor")]
    pub descriptor: String,

    /// Directory under each package that holds installed dependencies.
    #[serde(default = "default_install_dir", rename = "install-dir")]
    pub install_dir: String,

    /// File name that marks an installed dependency directory.
    #[serde(default = "default_manifest")]
    pub manifest: String,

    #[serde(default)]
    pub install: InstallConfig,
}

impl Default for DedupeConfig {
    fn default() -> Self {
        Self {
            descriptor: default_descriptor(),
            install_dir: default_install_dir(),
            manifest: default_manifest(),
            install: InstallConfig::default(),
        }
    }
}

fn default_descriptor() -> String {
    "sfdx-project.json".to_string()
}

fn default_install_dir() -> String {
    "node_modules".to_string()
}

fn default_manifest() -> String {
    "package.json".to_string()
}

/// Package-manager invocation from `[install]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallConfig {
    #[serde(default = "default_program")]
    pub program: String,
    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
        }
    }
}

fn default_program() -> String {
    "npm".to_string()
}

fn default_args() -> Vec<String> {
    vec!["install".to_string()]
}

impl DedupeConfig {
    /// Load `.dedupe.toml` from `root`, or return defaults if the file doesn't exist.
    pub fn load(root: &Path) -> Result<Self, DedupeError> {
        let path = Self::path_in(root);
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path).map_err(|e| DedupeError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        let config = Self::from_toml(&content)?;
        tracing::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse a configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, DedupeError> {
        toml::from_str(content).map_err(|e| DedupeError::Config {
            message: format!("Failed to parse {CONFIG_FILE}: {e}"),
        })
    }

    /// Returns the path to the configuration file under `root`.
    pub fn path_in(root: &Path) -> PathBuf {
        root.join(CONFIG_FILE)
    }
}
