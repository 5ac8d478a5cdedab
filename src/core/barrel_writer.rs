//! Barrel file planning and persistence

use crate::error::{BarrelError, Result};
use crate::models::barrel::{ExportStatement, ExtensionFamily, FileTypeTally, TallyResolution};
use crate::models::config::{OutputMode, Settings};
use crate::output::{FileWriter, OutputWriter};
use std::fs;
use std::path::{Path, PathBuf};

/// What the writer will do for one scan root
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BarrelPlan {
    /// No statements were produced; nothing is written
    NothingFound,
    /// Both families were scanned; nothing is written
    FamilyConflict {
        script: Vec<PathBuf>,
        typed: Vec<PathBuf>,
    },
    /// Write `contents` to `path`
    Write {
        path: PathBuf,
        family: ExtensionFamily,
        contents: String,
    },
}

/// Decides the barrel's extension and writes it
pub struct BarrelWriter {
    settings: Settings,
}

impl BarrelWriter {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Decide the outcome for `root` from the walk's statements and tally
    pub fn plan(&self, root: &Path, statements: &[ExportStatement], tally: FileTypeTally) -> BarrelPlan {
        if statements.is_empty() {
            return BarrelPlan::NothingFound;
        }

        match tally.resolve() {
            TallyResolution::Single(family) => BarrelPlan::Write {
                path: self.settings.output_path(root, family),
                family,
                contents: render(statements),
            },
            TallyResolution::Conflict => {
                let (script, typed) = tally.into_parts();
                BarrelPlan::FamilyConflict { script, typed }
            }
            // Statements always come from tallied files
            TallyResolution::Empty => BarrelPlan::NothingFound,
        }
    }

    /// Write planned contents, creating the output subdirectory when configured
    pub fn persist(&self, path: &Path, contents: &str) -> Result<()> {
        if self.settings.output_mode == OutputMode::Subdirectory {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir).map_err(|e| BarrelError::OutputDirectoryCreate {
                    path: dir.to_path_buf(),
                    source: e,
                })?;
            }
        }

        FileWriter::new(path).write(contents)
    }
}

/// Barrel file contents: one statement per line, no trailing newline
pub fn render(statements: &[ExportStatement]) -> String {
    statements
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
