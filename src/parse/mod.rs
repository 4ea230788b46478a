//! Module declaration parsing.
//!
//! A module source file opens with a declaration header naming the module and
//! listing the modules it requires, e.g.:
//!
//! ```text
//! # utilities for the renderer
//! module app.render.core requires app.util, app.geometry
//! ```
//!
//! Only the header is read: blank lines and `#` comment lines may precede the
//! declaration, and the first contentful line must be the declaration itself.
//! Everything after it is ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use regex::Regex;

use crate::platform::Platform;

/// Number of header lines inspected before giving up on a file.
const MAX_HEADER_LINES: usize = 64;

/// A parsed module declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDecl {
    pub name: String,
    pub requires: Vec<String>,
}

/// Trait for extracting a module declaration from a source file.
///
/// Implementations must read the file header only, never the whole file.
/// Files with no recognizable declaration yield `None`, never an error.
pub trait DeclParser {
    fn parse_decl(&self, file: &Path) -> Option<ModuleDecl>;
}

/// Header parser for the declaration dialect of a [`Platform`].
///
/// The host dialect introduces dependencies with `requires`; the script
/// dialect additionally accepts `imports`. The combined platform accepts
/// both keywords.
pub struct HeaderParser {
    decl_re: Regex,
}

impl HeaderParser {
    #[must_use]
    pub fn new(platform: Platform) -> Self {
        let keyword = match platform {
            Platform::Host => "requires",
            Platform::Script | Platform::Any => "requires|imports",
        };
        let pattern = format!(
            r"^module\s+([A-Za-z][A-Za-z0-9_-]*(?:\.[A-Za-z][A-Za-z0-9_-]*)*)(?:\s+(?:{keyword})\s+(.+))?\s*$"
        );
        Self {
            // The pattern is built from fixed text plus a fixed keyword
            // alternation, so compilation cannot fail.
            decl_re: Regex::new(&pattern).unwrap(),
        }
    }

    fn parse_line(&self, line: &str) -> Option<ModuleDecl> {
        let captures = self.decl_re.captures(line.trim())?;
        let name = captures.get(1)?.as_str().to_string();
        let requires = captures.get(2).map_or_else(Vec::new, |m| {
            m.as_str()
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect()
        });
        Some(ModuleDecl { name, requires })
    }
}

impl DeclParser for HeaderParser {
    fn parse_decl(&self, file: &Path) -> Option<ModuleDecl> {
        let reader = BufReader::new(File::open(file).ok()?);

        for line in reader.lines().take(MAX_HEADER_LINES) {
            let line = line.ok()?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            // First contentful line decides: either it is the declaration
            // or the file has none.
            return self.parse_line(trimmed);
        }

        None
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
