use std::path::{Component, Path, PathBuf};

use crate::errors::DedupeError;

/// Walk up from `start` looking for a file named `filename`.
/// Returns the path to the directory containing the file, or `None`.
pub fn find_ancestor_with(start: &Path, filename: &str) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(filename);
        if candidate.is_file() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

/// Returns `true` if `path` is relative and only made of normal components.
///
/// Used to reject names like `../x` or `/etc` before joining them under a
/// directory that is about to be deleted from.
pub fn is_plain_relative(path: &Path) -> bool {
    let mut components = path.components().peekable();
    if components.peek().is_none() {
        return false;
    }
    components.all(|c| matches!(c, Component::Normal(_)))
}

/// Remove a file or directory tree. Symbolic links are removed, not followed.
///
/// Returns `Ok(false)` if nothing existed at `path`.
pub fn remove_tree(path: &Path) -> Result<bool, DedupeError> {
    let meta = match std::fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(source) => {
            return Err(DedupeError::Removal {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let result = if meta.is_dir() {
        std::fs::remove_dir_all(path)
    } else {
        std::fs::remove_file(path)
    };
    result.map_err(|source| DedupeError::Removal {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(true)
}
