//! Configuration file parsing utilities

use std::fs;
use std::path::{Path, PathBuf};

use super::file::DEFAULT_CONFIG_FILE;
use crate::error::{BarrelError, Result};
use crate::models::config::PartialSettings;

/// Parse a TOML configuration file into PartialSettings
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(BarrelError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| BarrelError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_config_content(&content, path)
}

/// Parse TOML configuration content into PartialSettings
pub fn parse_config_content<P: AsRef<Path>>(content: &str, path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    let settings: PartialSettings = toml::from_str(content).map_err(|e| BarrelError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    validate_partial_settings(&settings, path)?;

    Ok(settings)
}

/// Validate partial settings for obvious errors
pub fn validate_partial_settings<P: AsRef<Path>>(settings: &PartialSettings, path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(dir) = &settings.output_dir {
        if dir.trim().is_empty() {
            return Err(BarrelError::config_error(format!(
                "Invalid empty output_dir in config file: {}",
                path.display()
            )));
        }
    }

    if let Some(base) = &settings.output_base_name {
        if base.trim().is_empty() {
            return Err(BarrelError::config_error(format!(
                "Invalid empty output_base_name in config file: {}",
                path.display()
            )));
        }
    }

    Ok(())
}

/// Candidate config file locations, in lookup order
pub fn default_config_locations(
    current_dir: Option<&Path>,
    home_dir: Option<&Path>,
    config_dir: Option<&Path>,
) -> Vec<PathBuf> {
    let mut locations = Vec::new();

    match current_dir {
        Some(dir) => locations.push(dir.join(DEFAULT_CONFIG_FILE)),
        None => locations.push(PathBuf::from(DEFAULT_CONFIG_FILE)),
    }

    if let Some(home) = home_dir {
        locations.push(home.join(DEFAULT_CONFIG_FILE));
    }

    if let Some(config) = config_dir {
        locations.push(config.join("barrelgen").join("config.toml"));
    }

    locations
}

/// Load the first config file that exists among `locations`
pub fn find_config_in(locations: &[PathBuf]) -> Result<Option<PartialSettings>> {
    match locations.iter().find(|path| path.is_file()) {
        Some(path) => Ok(Some(parse_config_file(path)?)),
        None => Ok(None),
    }
}

/// Find and load configuration from default locations
pub fn find_default_config() -> Result<Option<PartialSettings>> {
    let locations = default_config_locations(
        None,
        dirs::home_dir().as_deref(),
        dirs::config_dir().as_deref(),
    );
    find_config_in(&locations)
}

/// Create a default configuration file at the specified path
pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(BarrelError::io_error)?;
        }
    }

    let default_config = include_str!("default_config.toml");

    fs::write(path, default_config).map_err(BarrelError::io_error)?;

    Ok(())
}
