use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Scan-scoped record of directories known to contain source files whose
/// paths do not match their declarations (typically build-output copies of
/// real sources).
///
/// One guard lives for exactly one `scan_directories` call: it is seeded
/// from `Snapshot::mismatched_dirs`, passed explicitly into the locator,
/// and its final contents are written back into the returned snapshot. It
/// is never shared across threads or scans.
///
/// Per directory the guard drives a two-state machine, preserved exactly
/// because downstream behavior depends on the asymmetry:
///
/// - **Clean**: candidates are checked per file; a failing file is dropped
///   with a warning and flags the directory.
/// - **Flagged**: the directory is re-checked as a unit every scan. All
///   candidates matching transitions it back to clean and keeps every file;
///   any failure keeps none of them this scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MismatchGuard {
    flagged: BTreeSet<PathBuf>,
}

impl MismatchGuard {
    #[must_use]
    pub fn new(flagged: BTreeSet<PathBuf>) -> Self {
        Self { flagged }
    }

    #[must_use]
    pub fn is_flagged(&self, dir: &Path) -> bool {
        self.flagged.contains(dir)
    }

    pub fn flag(&mut self, dir: &Path) {
        self.flagged.insert(dir.to_path_buf());
    }

    pub fn unflag(&mut self, dir: &Path) {
        self.flagged.remove(dir);
    }

    /// Final contents, captured back into the snapshot at scan end.
    #[must_use]
    pub fn into_flagged(self) -> BTreeSet<PathBuf> {
        self.flagged
    }
}

#[cfg(test)]
#[path = "guard_tests.rs"]
mod tests;
