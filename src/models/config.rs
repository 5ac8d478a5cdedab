//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::barrel::ExtensionFamily;

/// Main configuration settings for barrelgen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Where the barrel file is written relative to the scan root
    pub output_mode: OutputMode,

    /// Subdirectory name used in subdirectory mode
    pub output_dir: String,

    /// Base name of the barrel file (without extension)
    pub output_base_name: String,

    /// Prefix prepended to every module specifier
    pub specifier_prefix: SpecifierPrefix,

    /// What to do with default exports that carry no name
    pub anonymous_exports: AnonymousExportPolicy,

    /// Console report format (text, json)
    pub output_format: OutputFormat,

    /// Plan the barrel without writing it
    pub dry_run: bool,

    /// Whether to suppress non-essential output
    pub quiet: bool,

    /// Whether to show detailed progress and debug information
    pub verbose: bool,

    /// Whether to use colors in text output
    pub use_colors: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_mode: OutputMode::Inline,
            output_dir: "barrel".to_string(),
            output_base_name: "index".to_string(),
            specifier_prefix: SpecifierPrefix::Current,
            anonymous_exports: AnonymousExportPolicy::Infer,
            output_format: OutputFormat::Text,
            dry_run: false,
            quiet: false,
            verbose: false,
            use_colors: true,
        }
    }
}

impl Settings {
    /// Directory the barrel file lands in for the given scan root
    pub fn output_directory(&self, root: &Path) -> PathBuf {
        match self.output_mode {
            OutputMode::Inline => root.to_path_buf(),
            OutputMode::Subdirectory => root.join(&self.output_dir),
        }
    }

    /// Full barrel file path for the given scan root and extension family
    pub fn output_path(&self, root: &Path, family: ExtensionFamily) -> PathBuf {
        self.output_directory(root).join(format!(
            "{}.{}",
            self.output_base_name,
            family.output_extension()
        ))
    }
}

/// Placement of the generated barrel file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Written directly into the scan root
    Inline,
    /// Written into a dedicated subdirectory of the scan root
    Subdirectory,
}

impl std::str::FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inline" => Ok(OutputMode::Inline),
            "subdirectory" | "subdir" => Ok(OutputMode::Subdirectory),
            _ => Err(format!("Invalid output mode: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputMode::Inline => write!(f, "inline"),
            OutputMode::Subdirectory => write!(f, "subdirectory"),
        }
    }
}

/// Relative prefix of generated module specifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecifierPrefix {
    /// `./name`
    #[serde(rename = "./")]
    Current,
    /// `../name`
    #[serde(rename = "../")]
    Parent,
}

impl SpecifierPrefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecifierPrefix::Current => "./",
            SpecifierPrefix::Parent => "../",
        }
    }

    /// Prefix that points from the barrel back to the scan root
    pub fn for_mode(mode: OutputMode) -> Self {
        match mode {
            OutputMode::Inline => SpecifierPrefix::Current,
            OutputMode::Subdirectory => SpecifierPrefix::Parent,
        }
    }
}

impl std::str::FromStr for SpecifierPrefix {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "./" | "." => Ok(SpecifierPrefix::Current),
            "../" | ".." => Ok(SpecifierPrefix::Parent),
            _ => Err(format!("Invalid specifier prefix: {}", s)),
        }
    }
}

impl std::fmt::Display for SpecifierPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handling of `export default` forms that carry no identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnonymousExportPolicy {
    /// Derive the name from the module specifier
    Infer,
    /// Leave the module out of the barrel
    Skip,
}

impl std::str::FromStr for AnonymousExportPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "infer" => Ok(AnonymousExportPolicy::Infer),
            "skip" => Ok(AnonymousExportPolicy::Skip),
            _ => Err(format!("Invalid anonymous export policy: {}", s)),
        }
    }
}

impl std::fmt::Display for AnonymousExportPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnonymousExportPolicy::Infer => write!(f, "infer"),
            AnonymousExportPolicy::Skip => write!(f, "skip"),
        }
    }
}

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable notices
    Text,
    /// JSON output for programmatic consumption
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialSettings {
    pub output_mode: Option<OutputMode>,
    pub output_dir: Option<String>,
    pub output_base_name: Option<String>,
    pub specifier_prefix: Option<SpecifierPrefix>,
    pub anonymous_exports: Option<AnonymousExportPolicy>,
    pub output_format: Option<OutputFormat>,
    pub dry_run: Option<bool>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
    pub use_colors: Option<bool>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.output_mode.is_some() {
            self.output_mode = other.output_mode;
        }
        if other.output_dir.is_some() {
            self.output_dir = other.output_dir;
        }
        if other.output_base_name.is_some() {
            self.output_base_name = other.output_base_name;
        }
        if other.specifier_prefix.is_some() {
            self.specifier_prefix = other.specifier_prefix;
        }
        if other.anonymous_exports.is_some() {
            self.anonymous_exports = other.anonymous_exports;
        }
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
        if other.dry_run.is_some() {
            self.dry_run = other.dry_run;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
        if other.use_colors.is_some() {
            self.use_colors = other.use_colors;
        }
    }

    /// Convert partial settings to full settings
    /// Uses defaults for any fields that are None
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(output_mode) = self.output_mode {
            settings.output_mode = output_mode;
        }
        if let Some(output_dir) = &self.output_dir {
            settings.output_dir = output_dir.clone();
        }
        if let Some(output_base_name) = &self.output_base_name {
            settings.output_base_name = output_base_name.clone();
        }
        // An unset prefix follows the output mode
        settings.specifier_prefix = self
            .specifier_prefix
            .unwrap_or_else(|| SpecifierPrefix::for_mode(settings.output_mode));
        if let Some(anonymous_exports) = self.anonymous_exports {
            settings.anonymous_exports = anonymous_exports;
        }
        if let Some(output_format) = self.output_format {
            settings.output_format = output_format;
        }
        if let Some(dry_run) = self.dry_run {
            settings.dry_run = dry_run;
        }
        if let Some(quiet) = self.quiet {
            settings.quiet = quiet;
        }
        if let Some(verbose) = self.verbose {
            settings.verbose = verbose;
        }
        if let Some(use_colors) = self.use_colors {
            settings.use_colors = use_colors;
        }

        settings
    }
}
