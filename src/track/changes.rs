use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use crate::track::snapshot::Snapshot;

/// On-disk modification time in milliseconds since the epoch, or `None` if
/// the file cannot be statted (vanished mid-scan, permission lost).
fn mtime_millis(path: &Path) -> Option<u64> {
    let modified = fs::metadata(path).and_then(|m| m.modified()).ok()?;
    let since_epoch = modified.duration_since(UNIX_EPOCH).ok()?;
    u64::try_from(since_epoch.as_millis()).ok()
}

/// Files whose modification time is strictly greater than the snapshot's
/// last scan time. An empty snapshot (`last_scan_time == 0`) reports every
/// statable file as modified. A file that cannot be statted is left out: it
/// falls out of the located set on a later scan and surfaces as deleted
/// there, never as an error here.
#[must_use]
pub fn modified(snapshot: &Snapshot, files: &BTreeSet<PathBuf>) -> BTreeSet<PathBuf> {
    files
        .iter()
        .filter(|f| mtime_millis(f).is_some_and(|t| t > snapshot.last_scan_time))
        .cloned()
        .collect()
}

/// Files present in the prior snapshot but absent from the located set.
#[must_use]
pub fn deleted(snapshot: &Snapshot, files: &BTreeSet<PathBuf>) -> BTreeSet<PathBuf> {
    snapshot.tracked_files.difference(files).cloned().collect()
}

#[cfg(test)]
#[path = "changes_tests.rs"]
mod tests;
