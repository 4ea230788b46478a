#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Temporary project tree of module source files for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Canonical form of the fixture root, for comparing against scan output.
    pub fn canonical_root(&self) -> PathBuf {
        dunce::canonicalize(self.dir.path()).expect("Failed to canonicalize fixture root")
    }

    /// Creates a file with the given content, making parent directories.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Creates a module source file whose path matches its declaration,
    /// e.g. `create_module("app.core", "hmod", &["app.util"])` writes
    /// `app/core.hmod`.
    pub fn create_module(&self, name: &str, extension: &str, requires: &[&str]) -> PathBuf {
        let relative = format!(
            "{}.{extension}",
            name.replace('.', "/").replace('-', "_")
        );
        let header = if requires.is_empty() {
            format!("module {name}\n")
        } else {
            format!("module {name} requires {}\n", requires.join(", "))
        };
        self.create_file(&relative, &header)
    }

    pub fn remove(&self, relative_path: &str) {
        fs::remove_file(self.dir.path().join(relative_path)).expect("Failed to remove file");
    }
}
