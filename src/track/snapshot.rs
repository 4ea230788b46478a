use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::graph::ModuleGraph;

/// The tracker state threaded through successive scans.
///
/// A snapshot is an immutable value: every scan operation returns a new one
/// and never mutates its input. `tracked_files` always reflects exactly the
/// files incorporated into the dependency graph as of `last_scan_time`.
/// Snapshots are safe to read from any thread, but the caller owns the
/// serialization of successive updates to a given snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Canonical paths of every file currently incorporated into the graph.
    pub tracked_files: BTreeSet<PathBuf>,
    /// Milliseconds since the epoch of the last effective scan; 0 before the
    /// first one, so an empty snapshot reports every file as modified.
    pub last_scan_time: u64,
    /// Canonical directories flagged as containing mismatched source files.
    pub mismatched_dirs: BTreeSet<PathBuf>,
    /// Dependency-graph state, owned by [`crate::graph`] and passed through
    /// opaquely by the scan core.
    pub graph: ModuleGraph,
}

impl Snapshot {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracked_files.is_empty()
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
