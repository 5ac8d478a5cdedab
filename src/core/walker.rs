//! Directory walking
//!
//! Visits a scan root and each of its immediate subdirectories, picks out
//! candidate module files and collects their export statements.

use crate::error::{BarrelError, Result};
use crate::models::barrel::{
    CandidateFile, ExtensionFamily, SkippedEntry, WalkResult,
};
use crate::models::config::{OutputMode, Settings};
use crate::parsers::exports::ExportDetector;
use crate::parsers::specifier::{file_stem_prefix, is_index_file};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Walker for one scan root and its immediate subdirectories
pub struct DirectoryWalker {
    settings: Settings,
    detector: ExportDetector,
}

impl DirectoryWalker {
    /// Create a new walker with the given settings
    pub fn new(settings: Settings) -> Self {
        let detector = ExportDetector::from_settings(&settings);
        Self { settings, detector }
    }

    /// Walk `root`, returning statements in discovery order and the file-type tally
    ///
    /// Only a failure to list `root` itself is returned as an error. Unreadable
    /// subdirectories and files are recorded in `WalkResult::skipped`.
    pub fn walk(&self, root: &Path) -> Result<WalkResult> {
        let entries = list_dir(root).map_err(|e| BarrelError::root_unreadable(root, e))?;
        let mut result = WalkResult::default();

        let mut script_files = Vec::new();
        let mut typed_files = Vec::new();
        let mut subdirs = Vec::new();

        for path in entries {
            let metadata = match fs::metadata(&path) {
                Ok(metadata) => metadata,
                Err(err) => {
                    Self::skip(&mut result, &path, BarrelError::file_unreadable(&path, err));
                    continue;
                }
            };

            if metadata.is_dir() {
                if self.is_output_dir(&path) {
                    debug!(path = %path.display(), "skipping output directory");
                    continue;
                }
                subdirs.push(path);
            } else if metadata.is_file() {
                let Some(candidate) = CandidateFile::new(path) else {
                    continue;
                };
                if self.is_excluded(&candidate.path) {
                    debug!(path = %candidate.path.display(), "skipping previously generated barrel");
                    continue;
                }
                match candidate.family {
                    ExtensionFamily::Script => script_files.push(candidate),
                    ExtensionFamily::Typed => typed_files.push(candidate),
                }
            }
        }

        for candidate in script_files.into_iter().chain(typed_files) {
            self.visit(candidate, &mut result);
        }

        for dir in subdirs {
            match Self::find_index_file(&dir) {
                Ok(Some(index)) => {
                    if let Some(candidate) = CandidateFile::new(index) {
                        self.visit(candidate, &mut result);
                    }
                }
                Ok(None) => {}
                Err(err) => Self::skip(&mut result, &dir, err),
            }
        }

        Ok(result)
    }

    /// Locate the sole `index.<ext>` module inside `dir`
    ///
    /// Returns `None` when there is no index module, and also when there are
    /// several (e.g. `index.js` next to `index.ts`). Only `index` files with a
    /// module extension are counted, so `index.css` next to `index.ts` leaves
    /// the directory unambiguous.
    pub fn find_index_file(dir: &Path) -> Result<Option<PathBuf>> {
        let entries = list_dir(dir).map_err(|e| BarrelError::subdirectory_unreadable(dir, e))?;

        let mut index_files: Vec<PathBuf> = entries
            .into_iter()
            .filter(|path| is_index_file(path) && ExtensionFamily::of_path(path).is_some())
            .filter(|path| path.is_file())
            .collect();

        match index_files.len() {
            1 => Ok(index_files.pop()),
            0 => Ok(None),
            count => {
                debug!(dir = %dir.display(), count, "ambiguous index modules, skipping directory");
                Ok(None)
            }
        }
    }

    /// Register a candidate in the tally and collect its export statement
    fn visit(&self, candidate: CandidateFile, result: &mut WalkResult) {
        // The tally counts scanned inputs, whether or not they export anything
        result.tally.record(candidate.family, &candidate.path);

        match self.detector.detect(&candidate.path) {
            Ok(Some(statement)) => {
                debug!(path = %candidate.path.display(), name = %statement.name, "default export found");
                result.statements.push(statement);
            }
            Ok(None) => {
                debug!(path = %candidate.path.display(), "no default export");
            }
            Err(err) => Self::skip(result, &candidate.path, err),
        }
    }

    /// Whether a root-level file is this generator's own output
    fn is_excluded(&self, path: &Path) -> bool {
        file_stem_prefix(path) == Some(self.settings.output_base_name.as_str())
    }

    fn is_output_dir(&self, path: &Path) -> bool {
        self.settings.output_mode == OutputMode::Subdirectory
            && path.file_name().and_then(|name| name.to_str()) == Some(self.settings.output_dir.as_str())
    }

    fn skip(result: &mut WalkResult, path: &Path, err: BarrelError) {
        warn!("{}", err.user_message());
        result.skipped.push(SkippedEntry {
            path: path.to_path_buf(),
            reason: err.to_string(),
        });
    }
}

/// Entries of `dir`, sorted by file name
fn list_dir(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut paths = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<io::Result<Vec<_>>>()?;
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}
