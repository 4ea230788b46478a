//! Module dependency graph.
//!
//! Stores, per tracked source file, the module it declares, plus the
//! dependency relation between modules. From these it derives the pending
//! `load` order (dependency-first) and `unload` order (dependents-first)
//! that a downstream reloader would consume.
//!
//! Like [`Snapshot`](crate::track::Snapshot), the graph is an immutable
//! value: `add_files` and `remove_files` return a new graph.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::parse::DeclParser;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleGraph {
    /// Module declared by each tracked file.
    file_modules: BTreeMap<PathBuf, String>,
    /// Modules required by each known module.
    dependencies: BTreeMap<String, BTreeSet<String>>,
    /// Modules pending (re)load, dependency-first.
    load: Vec<String>,
    /// Modules pending unload, dependents-first.
    unload: Vec<String>,
}

impl ModuleGraph {
    #[must_use]
    pub fn module_of(&self, file: &Path) -> Option<&str> {
        self.file_modules.get(file).map(String::as_str)
    }

    #[must_use]
    pub fn dependencies_of(&self, module: &str) -> Option<&BTreeSet<String>> {
        self.dependencies.get(module)
    }

    #[must_use]
    pub fn load_order(&self) -> &[String] {
        &self.load
    }

    #[must_use]
    pub fn unload_order(&self) -> &[String] {
        &self.unload
    }

    #[must_use]
    pub fn module_count(&self) -> usize {
        self.dependencies.len()
    }

    /// Incorporate parsed declarations for `files`, returning the new graph.
    ///
    /// Files without a parseable declaration stay tracked by the scanner but
    /// contribute nothing here. Changed modules and their transitive
    /// dependents are appended to the pending load order (dependency-first)
    /// and to the pending unload order (reversed).
    #[must_use]
    pub fn add_files(&self, files: &BTreeSet<PathBuf>, parser: &dyn DeclParser) -> Self {
        let mut next = self.clone();
        let mut changed: BTreeSet<String> = BTreeSet::new();

        for file in files {
            if let Some(decl) = parser.parse_decl(file) {
                let previous = next.file_modules.insert(file.clone(), decl.name.clone());
                if let Some(old) = previous {
                    next.drop_if_orphaned(&old);
                }
                next.dependencies
                    .insert(decl.name.clone(), decl.requires.into_iter().collect());
                changed.insert(decl.name);
            } else if let Some(old) = next.file_modules.remove(file) {
                next.drop_if_orphaned(&old);
            }
        }

        let affected = next.with_transitive_dependents(&changed);
        let ordered = next.topological_order(&affected);
        next.queue_pending(&ordered);
        next
    }

    /// Forget `files`, returning the new graph.
    ///
    /// Modules left with no declaring file leave the dependency map and are
    /// appended to the pending unload order.
    #[must_use]
    pub fn remove_files(&self, files: &BTreeSet<PathBuf>) -> Self {
        let mut next = self.clone();
        let mut orphaned: BTreeSet<String> = BTreeSet::new();

        for file in files {
            if let Some(module) = next.file_modules.remove(file)
                && next.drop_if_orphaned(&module)
            {
                orphaned.insert(module);
            }
        }

        next.load.retain(|m| !orphaned.contains(m));
        next.unload.retain(|m| !orphaned.contains(m));
        next.unload.extend(orphaned);
        next
    }

    /// Remove `module` from the dependency map if no remaining file declares
    /// it. Returns true if it was dropped.
    fn drop_if_orphaned(&mut self, module: &str) -> bool {
        if self.file_modules.values().any(|m| m == module) {
            return false;
        }
        self.dependencies.remove(module).is_some()
    }

    /// `seed` plus every module that transitively depends on one of its
    /// members.
    fn with_transitive_dependents(&self, seed: &BTreeSet<String>) -> BTreeSet<String> {
        let mut affected = seed.clone();
        let mut frontier: Vec<String> = seed.iter().cloned().collect();

        while let Some(module) = frontier.pop() {
            for (dependent, requires) in &self.dependencies {
                if requires.contains(&module) && affected.insert(dependent.clone()) {
                    frontier.push(dependent.clone());
                }
            }
        }

        affected
    }

    /// Order `members` so that every module follows the members it requires.
    ///
    /// Ties resolve in name order. A dependency cycle never fails a scan:
    /// once no member is ready, the remainder is appended in name order.
    fn topological_order(&self, members: &BTreeSet<String>) -> Vec<String> {
        let mut ordered: IndexSet<String> = IndexSet::new();
        let mut remaining = members.clone();

        while !remaining.is_empty() {
            let ready: Vec<String> = remaining
                .iter()
                .filter(|m| {
                    self.dependencies.get(*m).is_none_or(|requires| {
                        requires
                            .iter()
                            .all(|r| !remaining.contains(r) || ordered.contains(r))
                    })
                })
                .cloned()
                .collect();

            if ready.is_empty() {
                // Cycle among the remainder.
                ordered.extend(remaining.iter().cloned());
                break;
            }
            for module in ready {
                remaining.remove(&module);
                ordered.insert(module);
            }
        }

        ordered.into_iter().collect()
    }

    /// Append `ordered` to the pending load order and its reverse to the
    /// pending unload order, moving re-queued modules to their new position.
    fn queue_pending(&mut self, ordered: &[String]) {
        let queued: BTreeSet<&String> = ordered.iter().collect();
        self.load.retain(|m| !queued.contains(m));
        self.load.extend(ordered.iter().cloned());
        self.unload.retain(|m| !queued.contains(m));
        self.unload.extend(ordered.iter().rev().cloned());
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
