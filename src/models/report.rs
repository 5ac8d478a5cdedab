//! Generation result structures

use super::barrel::{ExportStatement, ExtensionFamily, SkippedEntry};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What happened to the barrel file of one scan root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BarrelOutcome {
    /// The barrel file was written
    Written {
        path: PathBuf,
        family: ExtensionFamily,
    },
    /// Dry run: the barrel file would have been written with `contents`
    DryRun {
        path: PathBuf,
        family: ExtensionFamily,
        contents: String,
    },
    /// No default export was found
    NothingFound,
    /// Both extension families were scanned, nothing was written
    FamilyConflict {
        script: Vec<PathBuf>,
        typed: Vec<PathBuf>,
    },
}

/// Complete result of generating the barrel for a single scan root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub root: PathBuf,
    pub outcome: BarrelOutcome,
    pub statements: Vec<ExportStatement>,
    pub skipped: Vec<SkippedEntry>,
}

impl GenerationReport {
    pub fn new(root: impl Into<PathBuf>, outcome: BarrelOutcome) -> Self {
        Self {
            root: root.into(),
            outcome,
            statements: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn with_statements(mut self, statements: Vec<ExportStatement>) -> Self {
        self.statements = statements;
        self
    }

    pub fn with_skipped(mut self, skipped: Vec<SkippedEntry>) -> Self {
        self.skipped = skipped;
        self
    }

    /// Whether a barrel file was (or, on a dry run, would be) produced
    pub fn produced_barrel(&self) -> bool {
        matches!(
            self.outcome,
            BarrelOutcome::Written { .. } | BarrelOutcome::DryRun { .. }
        )
    }
}

/// A scan root whose generation failed outright
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedPath {
    pub root: PathBuf,
    pub message: String,
}

/// Results of one invocation over any number of scan roots
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    pub reports: Vec<GenerationReport>,
    pub failures: Vec<FailedPath>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_report(&mut self, report: GenerationReport) {
        self.reports.push(report);
    }

    pub fn add_failure(&mut self, root: impl Into<PathBuf>, message: impl Into<String>) {
        self.failures.push(FailedPath {
            root: root.into(),
            message: message.into(),
        });
    }

    /// Number of roots that produced a barrel file
    pub fn barrels_produced(&self) -> usize {
        self.reports.iter().filter(|r| r.produced_barrel()).count()
    }

    /// Number of roots processed, failed ones included
    pub fn total_paths(&self) -> usize {
        self.reports.len() + self.failures.len()
    }
}
