use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::parse::DeclParser;
use crate::platform::{self, SourceFilter};
use crate::track::guard::MismatchGuard;
use crate::track::{matcher, paths};

/// Locate the trustworthy source files under `dirs`.
///
/// Explicit stages, in order: exists-filter → canonicalize → candidate
/// enumeration → mismatch filtering → canonicalize survivors. Non-existent
/// directories are silently skipped; a candidate that vanishes between
/// enumeration and resolution is silently dropped. Only set membership of
/// the result is contractual, never ordering.
///
/// # Errors
/// Canonicalization failure on an explicitly supplied, existing directory
/// propagates: the caller asked for that path and must not silently lose it.
pub fn locate(
    dirs: &[PathBuf],
    filter: &SourceFilter,
    guard: &mut MismatchGuard,
    parser: &dyn DeclParser,
) -> Result<BTreeSet<PathBuf>> {
    let mut located = BTreeSet::new();

    for dir in dirs {
        if !dir.exists() {
            continue;
        }
        let canon_dir = paths::canonicalize(dir)?;
        let candidates = platform::find_source_files(&canon_dir, filter);
        let trusted = filter_mismatches(&canon_dir, candidates, guard, parser);
        for file in trusted {
            if let Ok(canonical) = paths::canonicalize(&file) {
                located.insert(canonical);
            }
        }
    }

    Ok(located)
}

/// Route a directory's candidates through the mismatch state machine.
fn filter_mismatches(
    dir: &Path,
    candidates: Vec<PathBuf>,
    guard: &mut MismatchGuard,
    parser: &dyn DeclParser,
) -> Vec<PathBuf> {
    if guard.is_flagged(dir) {
        recheck_flagged(dir, candidates, guard, parser)
    } else {
        filter_clean(dir, candidates, guard, parser)
    }
}

/// Clean directory: per-file filtering. A failing file is dropped with a
/// warning and flags the directory; the remaining candidates of this scan
/// are still judged individually.
fn filter_clean(
    dir: &Path,
    candidates: Vec<PathBuf>,
    guard: &mut MismatchGuard,
    parser: &dyn DeclParser,
) -> Vec<PathBuf> {
    candidates
        .into_iter()
        .filter(|file| {
            if matcher::matches(dir, file, parser) {
                true
            } else {
                eprintln!(
                    "modtrack: warning: {} declares a module inconsistent with its path; ignoring",
                    file.display()
                );
                guard.flag(dir);
                false
            }
        })
        .collect()
}

/// Flagged directory: all-or-nothing. Every candidate matching restores the
/// directory and keeps all files; any failure keeps none of them this scan.
/// Trading temporarily dropped valid files for never tracking a duplicate
/// declaration is intentional.
fn recheck_flagged(
    dir: &Path,
    candidates: Vec<PathBuf>,
    guard: &mut MismatchGuard,
    parser: &dyn DeclParser,
) -> Vec<PathBuf> {
    if candidates
        .iter()
        .all(|file| matcher::matches(dir, file, parser))
    {
        guard.unflag(dir);
        eprintln!("modtrack: no longer ignoring directory {}", dir.display());
        candidates
    } else {
        eprintln!(
            "modtrack: ignoring directory {}: contains files whose declarations do not match their paths",
            dir.display()
        );
        Vec::new()
    }
}

#[cfg(test)]
#[path = "locator_tests.rs"]
mod tests;
