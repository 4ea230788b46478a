use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::Result;
use crate::parse::HeaderParser;
use crate::platform::{self, Platform, SourceFilter};
use crate::track::guard::MismatchGuard;
use crate::track::snapshot::Snapshot;
use crate::track::{changes, locator};

/// Options for one scan invocation.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Platform whose extension set and dialect apply.
    pub platform: Platform,
    /// Treat every located file as modified, regardless of timestamps.
    pub force_all: bool,
    /// Glob patterns excluded from candidate enumeration.
    pub exclude: Vec<String>,
}

impl ScanOptions {
    #[must_use]
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            platform,
            ..Self::default()
        }
    }
}

/// Incorporate an already-located file set into the snapshot.
///
/// Computes the deleted set and (unless `force_all`) the modified set. When
/// both are empty the input snapshot is returned unchanged: no timestamp
/// bump, no graph mutation. Repeating a scan over an unchanged file set is
/// therefore a no-op. Otherwise deleted files leave `tracked_files` and the
/// graph, modified files enter both (parsed under `options.platform`), and
/// `last_scan_time` is stamped with the current time.
#[must_use]
pub fn scan_files(
    snapshot: &Snapshot,
    files: &BTreeSet<PathBuf>,
    options: &ScanOptions,
) -> Snapshot {
    let deleted = changes::deleted(snapshot, files);
    let modified = if options.force_all {
        files.clone()
    } else {
        changes::modified(snapshot, files)
    };

    if deleted.is_empty() && modified.is_empty() {
        return snapshot.clone();
    }

    let mut next = snapshot.clone();
    next.graph = next.graph.remove_files(&deleted);
    for file in &deleted {
        next.tracked_files.remove(file);
    }

    let parser = HeaderParser::new(options.platform);
    next.graph = next.graph.add_files(&modified, &parser);
    next.tracked_files.extend(modified);

    next.last_scan_time = now_millis();
    next
}

/// Scan `dirs` for changed module sources and fold them into the snapshot.
///
/// An empty `dirs` substitutes the `MODTRACK_PATH` search path. The mismatch
/// guard is seeded from `snapshot.mismatched_dirs`, threaded through the
/// locator for exactly this call, and its final contents are captured into
/// the returned snapshot.
///
/// # Errors
/// Propagates invalid exclude patterns and canonicalization failures on
/// explicitly supplied directories.
pub fn scan_directories(
    snapshot: &Snapshot,
    dirs: &[PathBuf],
    options: &ScanOptions,
) -> Result<Snapshot> {
    let dirs = if dirs.is_empty() {
        platform::search_path_dirs()
    } else {
        dirs.to_vec()
    };

    let filter = SourceFilter::new(options.platform, &options.exclude)?;
    let parser = HeaderParser::new(options.platform);
    let mut guard = MismatchGuard::new(snapshot.mismatched_dirs.clone());

    let files = locator::locate(&dirs, &filter, &mut guard, &parser)?;
    let mut next = scan_files(snapshot, &files, options);
    next.mismatched_dirs = guard.into_flagged();
    Ok(next)
}

/// Scan for the host platform with default options.
///
/// # Errors
/// See [`scan_directories`].
#[deprecated = "use scan_directories with explicit ScanOptions"]
pub fn scan(snapshot: &Snapshot, dirs: &[PathBuf]) -> Result<Snapshot> {
    scan_directories(snapshot, dirs, &ScanOptions::for_platform(Platform::Host))
}

/// Full host-platform re-scan ignoring timestamps.
///
/// # Errors
/// See [`scan_directories`].
#[deprecated = "use scan_directories with explicit ScanOptions"]
pub fn scan_all(snapshot: &Snapshot, dirs: &[PathBuf]) -> Result<Snapshot> {
    let options = ScanOptions {
        platform: Platform::Host,
        force_all: true,
        exclude: Vec::new(),
    };
    scan_directories(snapshot, dirs, &options)
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
