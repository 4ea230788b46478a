//! Incremental scan core.
//!
//! One scan flows one direction: directories → candidate files → trustworthy
//! files → change sets → graph mutation → new snapshot. Each stage lives in
//! its own submodule so it can be tested on its own.

mod changes;
mod guard;
mod locator;
mod matcher;
mod paths;
mod scan;
mod snapshot;

pub use changes::{deleted, modified};
pub use guard::MismatchGuard;
pub use locator::locate;
pub use matcher::{expected_path, matches};
pub use paths::{canonicalize, relative_path};
pub use scan::{ScanOptions, scan_directories, scan_files};
#[allow(deprecated)]
pub use scan::{scan, scan_all};
pub use snapshot::Snapshot;
