//! Project configuration.
//!
//! An optional `.modtrack.toml` at the project root supplies the directory
//! list, default platform and exclude patterns for the CLI. Command-line
//! flags override it. The library core never reads configuration; it only
//! takes explicit arguments.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::platform::Platform;

pub const CONFIG_FILENAME: &str = ".modtrack.toml";

/// Starter configuration written by `modtrack init`.
pub const STARTER_CONFIG: &str = "\
# modtrack configuration
#
# Directories scanned when none are given on the command line.
dirs = [\"src\"]

# Default platform: \"host\", \"script\" or \"any\".
platform = \"host\"

# Glob patterns excluded from candidate enumeration.
exclude = []
";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directories to scan when the command line names none.
    #[serde(default)]
    pub dirs: Vec<PathBuf>,

    /// Default platform for scans.
    #[serde(default)]
    pub platform: Platform,

    /// Glob patterns excluded from candidate enumeration.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Config {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| crate::ModTrackError::FileAccess {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(toml::from_str(&raw)?)
    }

    /// Load `.modtrack.toml` from `project_root` if present, otherwise the
    /// defaults.
    ///
    /// # Errors
    /// Returns an error only for an existing but unreadable or invalid file.
    pub fn load_or_default(project_root: &Path) -> Result<Self> {
        let path = project_root.join(CONFIG_FILENAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
