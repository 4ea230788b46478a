use std::path::{Path, PathBuf};

use crate::error::{ModTrackError, Result};

/// Resolve symlinks and relative segments in `path`.
///
/// Two input paths that canonicalize to the same result are the same entity
/// to the tracker; this is what makes scanning symlink-invariant.
///
/// # Errors
/// Returns [`ModTrackError::Canonicalize`] if the path cannot be resolved.
pub fn canonicalize(path: &Path) -> Result<PathBuf> {
    dunce::canonicalize(path).map_err(|e| ModTrackError::Canonicalize {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Path of `file` relative to ancestor `dir`, or `None` when `dir` is not an
/// ancestor. Purely lexical: neither path touches the filesystem, so both
/// should already be canonical.
#[must_use]
pub fn relative_path(dir: &Path, file: &Path) -> Option<PathBuf> {
    file.strip_prefix(dir).ok().map(Path::to_path_buf)
}

#[cfg(test)]
#[path = "paths_tests.rs"]
mod tests;
