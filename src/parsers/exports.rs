//! Default export detection
//!
//! Detection is a single textual pattern scan, not a parse. Comments or
//! strings that happen to contain `export default` are matched like code.

use crate::error::{BarrelError, Result};
use crate::models::barrel::ExportStatement;
use crate::models::config::{AnonymousExportPolicy, Settings, SpecifierPrefix};
use crate::parsers::specifier::{identifier_from_module_base, module_base, resolve_specifier};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

static DEFAULT_EXPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"export\s+default\s+(?:async\b\s*)?",
        r"(?P<keyword>function\b\s*\*?\s*|(?:abstract\s+)?class\s+|interface\s+|enum\s+|const\s+|let\s+|var\s+)?",
        r"(?:(?P<name>[A-Za-z_$][\w$]*)(?P<tail>\s*(?:=>|\())?|(?P<arrow>\([^)]*\)\s*=>))",
    ))
    .expect("DEFAULT_EXPORT regex is invalid")
});

/// Words that can follow `export default` without naming the export
const RESERVED_WORDS: &[&str] = &[
    "abstract", "async", "await", "class", "const", "delete", "enum", "false", "function",
    "import", "interface", "let", "new", "null", "super", "this", "true", "typeof",
    "undefined", "var", "void", "yield",
];

/// A default export found in module source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultExport {
    /// The export carries an identifier
    Named(String),
    /// Arrow functions, anonymous declarations and expressions
    Anonymous,
}

/// Find the first default export in `content`
pub fn find_default_export(content: &str) -> Option<DefaultExport> {
    let caps = DEFAULT_EXPORT.captures(content)?;

    if caps.name("arrow").is_some() {
        return Some(DefaultExport::Anonymous);
    }

    let name = caps.name("name")?.as_str();
    if RESERVED_WORDS.contains(&name) {
        return Some(DefaultExport::Anonymous);
    }

    if let Some(tail) = caps.name("tail") {
        let tail = tail.as_str().trim_start();
        // `x => ...` is an arrow; `memo(Button)` is a call unless a declaration keyword precedes it
        if tail == "=>" || caps.name("keyword").is_none() {
            return Some(DefaultExport::Anonymous);
        }
    }

    Some(DefaultExport::Named(name.to_string()))
}

/// Turns candidate files into export statements
#[derive(Debug, Clone)]
pub struct ExportDetector {
    prefix: SpecifierPrefix,
    anonymous: AnonymousExportPolicy,
}

impl ExportDetector {
    pub fn new(prefix: SpecifierPrefix, anonymous: AnonymousExportPolicy) -> Self {
        Self { prefix, anonymous }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.specifier_prefix, settings.anonymous_exports)
    }

    /// Read a module file and derive its export statement, if any
    pub fn detect(&self, path: &Path) -> Result<Option<ExportStatement>> {
        let bytes = fs::read(path).map_err(|e| BarrelError::file_unreadable(path, e))?;
        let content = String::from_utf8_lossy(&bytes);

        Ok(self.statement_for(path, &content))
    }

    /// Derive the export statement for already-loaded content
    pub fn statement_for(&self, path: &Path, content: &str) -> Option<ExportStatement> {
        let export = find_default_export(content)?;

        let (Some(base), Some(specifier)) = (module_base(path), resolve_specifier(path, self.prefix))
        else {
            debug!(path = %path.display(), "no usable module name");
            return None;
        };

        let name = match export {
            DefaultExport::Named(name) => name,
            DefaultExport::Anonymous => match self.anonymous {
                AnonymousExportPolicy::Infer => identifier_from_module_base(&base),
                AnonymousExportPolicy::Skip => {
                    debug!(path = %path.display(), "skipping anonymous default export");
                    return None;
                }
            },
        };

        Some(ExportStatement::new(name, specifier, path))
    }
}
