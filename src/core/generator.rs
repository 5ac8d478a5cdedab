//! Barrel generation for a single scan root

use crate::core::barrel_writer::{BarrelPlan, BarrelWriter};
use crate::core::walker::DirectoryWalker;
use crate::error::Result;
use crate::models::config::Settings;
use crate::models::report::{BarrelOutcome, GenerationReport};
use std::path::Path;
use tracing::{debug, info};

/// Walks a root, plans the barrel and writes it
pub struct BarrelGenerator {
    settings: Settings,
    walker: DirectoryWalker,
    writer: BarrelWriter,
}

impl BarrelGenerator {
    pub fn new(settings: Settings) -> Self {
        let walker = DirectoryWalker::new(settings.clone());
        let writer = BarrelWriter::new(settings.clone());
        Self {
            settings,
            walker,
            writer,
        }
    }

    /// Generate the barrel file for `root`
    ///
    /// Fails when `root` cannot be listed or the barrel cannot be written.
    /// Finding nothing and mixing extension families are reported outcomes.
    pub fn generate(&self, root: &Path) -> Result<GenerationReport> {
        debug!(root = %root.display(), "scanning");
        let walk = self.walker.walk(root)?;

        let outcome = match self.writer.plan(root, &walk.statements, walk.tally) {
            BarrelPlan::NothingFound => BarrelOutcome::NothingFound,
            BarrelPlan::FamilyConflict { script, typed } => {
                BarrelOutcome::FamilyConflict { script, typed }
            }
            BarrelPlan::Write {
                path,
                family,
                contents,
            } => {
                if self.settings.dry_run {
                    BarrelOutcome::DryRun {
                        path,
                        family,
                        contents,
                    }
                } else {
                    self.writer.persist(&path, &contents)?;
                    info!(path = %path.display(), exports = walk.statements.len(), "barrel written");
                    BarrelOutcome::Written { path, family }
                }
            }
        };

        Ok(GenerationReport::new(root, outcome)
            .with_statements(walk.statements)
            .with_skipped(walk.skipped))
    }
}
