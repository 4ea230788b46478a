//! Snapshot persistence for the CLI.
//!
//! The snapshot lives in `.git/modtrack/snapshot.json` when the project root
//! is a git repository (automatically gitignored), otherwise in
//! `.modtrack/snapshot.json`. The library core never touches these files;
//! snapshots only hit disk at the CLI boundary.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILENAME;
use crate::error::Result;
use crate::track::Snapshot;

const STATE_DIR_NAME: &str = "modtrack";
const FALLBACK_STATE_DIR: &str = ".modtrack";
const SNAPSHOT_FILENAME: &str = "snapshot.json";

/// Detect the state directory for the snapshot file.
///
/// Returns `.git/modtrack/` if the project root has a `.git` directory,
/// otherwise `.modtrack/` in the project root.
#[must_use]
pub fn detect_state_dir(project_root: &Path) -> PathBuf {
    let git_dir = project_root.join(".git");
    if git_dir.is_dir() {
        git_dir.join(STATE_DIR_NAME)
    } else {
        project_root.join(FALLBACK_STATE_DIR)
    }
}

/// Snapshot file path for the given project root.
#[must_use]
pub fn snapshot_path(project_root: &Path) -> PathBuf {
    detect_state_dir(project_root).join(SNAPSHOT_FILENAME)
}

/// Discover the project root by walking up from `start` looking for a
/// `.git/` directory or a `.modtrack.toml` file. Returns `start` (made
/// absolute when possible) if neither marker is found.
#[must_use]
pub fn discover_project_root(start: &Path) -> PathBuf {
    let abs_start = fs::canonicalize(start).unwrap_or_else(|_| start.to_path_buf());

    for ancestor in abs_start.ancestors() {
        if ancestor.join(".git").is_dir() {
            return ancestor.to_path_buf();
        }
        if ancestor.join(CONFIG_FILENAME).is_file() {
            return ancestor.to_path_buf();
        }
    }

    abs_start
}

/// Ensure the parent directory exists for a given path.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Load the snapshot from `path`; a missing file is an empty snapshot.
///
/// # Errors
/// Returns an error for an existing but unreadable or malformed file.
pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    if !path.exists() {
        return Ok(Snapshot::default());
    }
    let raw = fs::read_to_string(path).map_err(|e| crate::ModTrackError::FileAccess {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(serde_json::from_str(&raw)?)
}

/// Save the snapshot to `path` atomically (temp file + rename), creating
/// the state directory if needed.
///
/// # Errors
/// Returns an error if the file cannot be serialized or written.
pub fn save_snapshot(path: &Path, snapshot: &Snapshot) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(snapshot)?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
