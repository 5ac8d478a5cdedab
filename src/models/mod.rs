//! Data models and structures for barrelgen

pub mod barrel;
pub mod config;
pub mod report;

pub use barrel::{
    CandidateFile, ExportStatement, ExtensionFamily, FileTypeTally, SkippedEntry,
    TallyResolution, WalkResult,
};
pub use config::Settings;
pub use report::{BarrelOutcome, FailedPath, GenerationReport, RunSummary};
