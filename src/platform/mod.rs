//! Target platforms and candidate source-file discovery.
//!
//! A platform determines which file extensions are recognized as module
//! sources and which declaration dialect applies. Files with the shared
//! `xmod` extension belong to every platform.

use std::env;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::error::{ModTrackError, Result};

/// Environment variable holding the default search path (directories
/// separated by the platform path-list separator).
pub const SEARCH_PATH_ENV: &str = "MODTRACK_PATH";

const HOST_EXT: &str = "hmod";
const SCRIPT_EXT: &str = "smod";
const SHARED_EXT: &str = "xmod";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Host platform: `.hmod` plus shared `.xmod` sources.
    #[default]
    Host,
    /// Script platform: `.smod` plus shared `.xmod` sources.
    Script,
    /// All recognized module sources regardless of platform.
    Any,
}

impl Platform {
    /// Extensions recognized as module sources for this platform.
    #[must_use]
    pub const fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Host => &[HOST_EXT, SHARED_EXT],
            Self::Script => &[SCRIPT_EXT, SHARED_EXT],
            Self::Any => &[HOST_EXT, SCRIPT_EXT, SHARED_EXT],
        }
    }

    #[must_use]
    pub fn recognizes(self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions().contains(&ext))
    }
}

/// Filter deciding which discovered files count as candidate sources.
///
/// Combines the platform extension set with user-supplied exclude globs
/// (typically build-output trees).
pub struct SourceFilter {
    platform: Platform,
    exclude_patterns: GlobSet,
}

impl SourceFilter {
    /// Create a filter for `platform` with the given exclude patterns.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(platform: Platform, exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| ModTrackError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| ModTrackError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            platform,
            exclude_patterns,
        })
    }

    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    #[must_use]
    pub fn should_include(&self, path: &Path) -> bool {
        self.platform.recognizes(path) && !self.exclude_patterns.is_match(path)
    }
}

/// List all candidate source files under `dir` that pass `filter`.
///
/// Unreadable entries are skipped; the directory itself not existing yields
/// an empty list.
#[must_use]
pub fn find_source_files(dir: &Path, filter: &SourceFilter) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().to_path_buf())
        .filter(|p| filter.should_include(p))
        .collect()
}

/// Directories from the `MODTRACK_PATH` environment variable, used when a
/// scan is invoked without an explicit directory list.
#[must_use]
pub fn search_path_dirs() -> Vec<PathBuf> {
    env::var_os(SEARCH_PATH_ENV)
        .map(|raw| env::split_paths(&raw).filter(|p| !p.as_os_str().is_empty()).collect())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
