use std::path::{Path, PathBuf};

use crate::parse::DeclParser;
use crate::track::paths;

/// The path (without extension) a file under `dir` must have to legally
/// declare `declared_name`: dots become separators and hyphens become
/// underscores within each segment.
#[must_use]
pub fn expected_path(dir: &Path, declared_name: &str) -> PathBuf {
    let mut expected = dir.to_path_buf();
    for segment in declared_name.split('.') {
        expected.push(segment.replace('-', "_"));
    }
    expected
}

/// Whether `file`'s on-disk location is consistent with the module it
/// declares.
///
/// The file's canonical path, extension stripped, must start with
/// [`expected_path`], so any recognized extension satisfies the declaration.
/// A file with no parseable declaration is a mismatch, not "no opinion";
/// so is a file that cannot be canonicalized (it may have vanished
/// mid-scan, and a vanished file must not vouch for its directory).
#[must_use]
pub fn matches(dir: &Path, file: &Path, parser: &dyn DeclParser) -> bool {
    let Some(decl) = parser.parse_decl(file) else {
        return false;
    };
    let Ok(canonical) = paths::canonicalize(file) else {
        return false;
    };
    canonical
        .with_extension("")
        .starts_with(expected_path(dir, &decl.name))
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
