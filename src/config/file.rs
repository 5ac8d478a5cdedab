//! Configuration file and environment sources

use std::path::{Path, PathBuf};

use super::{parser, ConfigSource};
use crate::error::{BarrelError, Result};
use crate::models::config::PartialSettings;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".barrelgen.toml";

/// Default environment variable prefix
pub const DEFAULT_ENV_PREFIX: &str = "BARRELGEN";

/// Configuration file source
pub struct FileConfig {
    path: PathBuf,
    name: String,
}

impl FileConfig {
    /// Create a new file configuration source with the default path
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CONFIG_FILE),
            name: "default config file".to_string(),
        }
    }

    /// Create a new file configuration source with a custom path
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            name: format!("config file ({})", path.as_ref().display()),
        }
    }

    /// Get the path of this configuration file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a default configuration file at this location
    pub fn create_default(&self) -> Result<()> {
        parser::create_default_config(&self.path)
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialSettings> {
        if !self.is_available() {
            return Err(BarrelError::ConfigNotFound {
                path: self.path.clone(),
            });
        }

        parser::parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        self.path.is_file()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Environment variable configuration source
pub struct EnvConfig {
    prefix: String,
    name: String,
}

/// Variable suffixes read by [`EnvConfig`]
const ENV_KEYS: [&str; 5] = [
    "OUTPUT_MODE",
    "OUTPUT_DIR",
    "OUTPUT_BASE_NAME",
    "SPECIFIER_PREFIX",
    "ANONYMOUS_EXPORTS",
];

impl EnvConfig {
    /// Create a new environment variable configuration source
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            name: format!("{} environment variables", &prefix),
            prefix,
        }
    }

    fn var_name(&self, key: &str) -> String {
        format!("{}_{}", self.prefix, key)
    }

    /// Build partial settings from a variable lookup.
    ///
    /// Values that fail to parse are ignored.
    pub fn load_with<F>(&self, lookup: F) -> PartialSettings
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(&self.var_name(key));
        let mut settings = PartialSettings::default();

        if let Some(mode) = get("OUTPUT_MODE") {
            settings.output_mode = mode.parse().ok();
        }

        if let Some(dir) = get("OUTPUT_DIR").filter(|d| !d.is_empty()) {
            settings.output_dir = Some(dir);
        }

        if let Some(base) = get("OUTPUT_BASE_NAME").filter(|b| !b.is_empty()) {
            settings.output_base_name = Some(base);
        }

        if let Some(prefix) = get("SPECIFIER_PREFIX") {
            settings.specifier_prefix = prefix.parse().ok();
        }

        if let Some(policy) = get("ANONYMOUS_EXPORTS") {
            settings.anonymous_exports = policy.parse().ok();
        }

        settings
    }
}

impl ConfigSource for EnvConfig {
    fn load(&self) -> Result<PartialSettings> {
        Ok(self.load_with(|name| std::env::var(name).ok()))
    }

    fn is_available(&self) -> bool {
        ENV_KEYS
            .iter()
            .any(|key| std::env::var(self.var_name(key)).is_ok())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENV_PREFIX)
    }
}
