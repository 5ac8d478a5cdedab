//! Settings validation

use crate::error::{BarrelError, Result};
use crate::models::config::{OutputMode, Settings};
use std::path::{Component, Path};

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        Self::validate_base_name(&settings.output_base_name)?;

        if settings.output_mode == OutputMode::Subdirectory {
            Self::validate_output_dir(&settings.output_dir)?;
        }

        if settings.quiet && settings.verbose {
            return Err(BarrelError::config_error(
                "quiet and verbose cannot be enabled together",
            ));
        }

        Ok(())
    }

    /// The base name must be a plain file stem
    fn validate_base_name(base: &str) -> Result<()> {
        if base.is_empty() {
            return Err(BarrelError::config_error("output_base_name must not be empty"));
        }

        if base.contains(['/', '\\', '.']) {
            return Err(BarrelError::config_error(format!(
                "output_base_name '{}' must not contain '/', '\\' or '.'",
                base
            )));
        }

        Ok(())
    }

    /// The output directory must be one relative path component
    fn validate_output_dir(dir: &str) -> Result<()> {
        let mut components = Path::new(dir).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) if !dir.contains(['/', '\\']) => Ok(()),
            _ => Err(BarrelError::config_error(format!(
                "output_dir '{}' must be a single directory name",
                dir
            ))),
        }
    }
}
