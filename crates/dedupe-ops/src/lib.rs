pub mod ops_dedupe;
pub mod ops_install;
pub mod ops_report;

use std::path::{Path, PathBuf};

use dedupe_core::config::{DedupeConfig, CONFIG_FILE};
use dedupe_util::errors::DedupeError;
use dedupe_util::fs::find_ancestor_with;

/// Locate the workspace root and load its configuration.
///
/// With an explicit `root` it is used as-is. Otherwise the nearest ancestor
/// of `cwd` holding `.dedupe.toml` or the default descriptor is chosen,
/// falling back to `cwd` so a missing descriptor is reported against it.
pub fn locate(cwd: &Path, root: Option<&Path>) -> miette::Result<(PathBuf, DedupeConfig)> {
    let root = match root {
        Some(dir) => cwd.join(dir),
        None => {
            let descriptor = DedupeConfig::default().descriptor;
            let by_config = find_ancestor_with(cwd, CONFIG_FILE);
            let by_descriptor = find_ancestor_with(cwd, &descriptor);
            by_config
                .into_iter()
                .chain(by_descriptor)
                .max_by_key(|p| p.components().count())
                .unwrap_or_else(|| cwd.to_path_buf())
        }
    };
    let root = root.canonicalize().map_err(|e| DedupeError::Generic {
        message: format!("Cannot access workspace root {}: {e}", root.display()),
    })?;
    let config = DedupeConfig::load(&root)?;
    tracing::debug!("workspace root: {}", root.display());
    Ok((root, config))
}
