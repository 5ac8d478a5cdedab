//! barrelgen - barrel file generator for JavaScript and TypeScript sources
//!
//! This library scans a directory and its immediate subdirectories for modules
//! with a default export and writes an index file re-exporting each of them
//! under an inferred name.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod parsers;

// Re-export commonly used types
pub use crate::core::{BarrelGenerator, BarrelWriter, DirectoryWalker};
pub use error::{handle_error, BarrelError, ErrorSeverity, Result, ResultExt};
pub use models::{
    config::Settings,
    report::{BarrelOutcome, GenerationReport, RunSummary},
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
