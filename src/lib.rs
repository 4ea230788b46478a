pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod parse;
pub mod platform;
pub mod state;
pub mod track;

pub use error::{ModTrackError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CONFIG_ERROR: i32 = 2;
