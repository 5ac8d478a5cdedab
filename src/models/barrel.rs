//! Scan-time data: candidate files, the file-type tally and export statements

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Module extension family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionFamily {
    /// `.js` and `.jsx`
    Script,
    /// `.ts` and `.tsx`
    Typed,
}

impl ExtensionFamily {
    /// Classify a bare extension (without the dot)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "js" | "jsx" => Some(ExtensionFamily::Script),
            "ts" | "tsx" => Some(ExtensionFamily::Typed),
            _ => None,
        }
    }

    /// Classify a path by its final extension
    pub fn of_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Extension used for a barrel file of this family
    pub fn output_extension(&self) -> &'static str {
        match self {
            ExtensionFamily::Script => "js",
            ExtensionFamily::Typed => "ts",
        }
    }
}

impl fmt::Display for ExtensionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtensionFamily::Script => write!(f, ".js/.jsx"),
            ExtensionFamily::Typed => write!(f, ".ts/.tsx"),
        }
    }
}

/// A module file eligible for export-statement generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub path: PathBuf,
    pub family: ExtensionFamily,
}

impl CandidateFile {
    /// Build a candidate, returning `None` when the extension is not a module one
    pub fn new(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let family = ExtensionFamily::of_path(&path)?;
        Some(Self { path, family })
    }
}

/// Input files seen during one walk, grouped by extension family
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileTypeTally {
    script: Vec<PathBuf>,
    typed: Vec<PathBuf>,
}

/// What the tally says about the barrel's extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TallyResolution {
    /// No module file was scanned
    Empty,
    /// All scanned files belong to one family
    Single(ExtensionFamily),
    /// Both families were scanned
    Conflict,
}

impl FileTypeTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a scanned file under its family
    pub fn record(&mut self, family: ExtensionFamily, path: impl Into<PathBuf>) {
        match family {
            ExtensionFamily::Script => self.script.push(path.into()),
            ExtensionFamily::Typed => self.typed.push(path.into()),
        }
    }

    pub fn script(&self) -> &[PathBuf] {
        &self.script
    }

    pub fn typed(&self) -> &[PathBuf] {
        &self.typed
    }

    pub fn is_empty(&self) -> bool {
        self.script.is_empty() && self.typed.is_empty()
    }

    pub fn resolve(&self) -> TallyResolution {
        match (self.script.is_empty(), self.typed.is_empty()) {
            (true, true) => TallyResolution::Empty,
            (false, true) => TallyResolution::Single(ExtensionFamily::Script),
            (true, false) => TallyResolution::Single(ExtensionFamily::Typed),
            (false, false) => TallyResolution::Conflict,
        }
    }

    /// Split the tally into its two sequences
    pub fn into_parts(self) -> (Vec<PathBuf>, Vec<PathBuf>) {
        (self.script, self.typed)
    }
}

/// One `export { default as Name } from 'specifier';` line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportStatement {
    /// Name the default export is re-exported under
    pub name: String,
    /// Relative module specifier, prefix included
    pub specifier: String,
    /// File the statement was derived from
    pub source: PathBuf,
}

impl ExportStatement {
    pub fn new(name: impl Into<String>, specifier: impl Into<String>, source: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            specifier: specifier.into(),
            source: source.into(),
        }
    }
}

impl fmt::Display for ExportStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "export {{ default as {} }} from '{}';", self.name, self.specifier)
    }
}

/// An entry the walk could not process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedEntry {
    pub path: PathBuf,
    pub reason: String,
}

/// Everything one walk of a scan root produced
#[derive(Debug, Default)]
pub struct WalkResult {
    /// Statements in discovery order
    pub statements: Vec<ExportStatement>,
    pub tally: FileTypeTally,
    pub skipped: Vec<SkippedEntry>,
}
