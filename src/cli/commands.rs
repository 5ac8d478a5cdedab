//! Command implementations

use super::Args;
use crate::config::{self, create_default_config, CliArgs, DEFAULT_CONFIG_FILE};
use crate::core::BarrelGenerator;
use crate::error::{handle_error, BarrelError, Result, ResultExt};
use crate::models::report::RunSummary;
use crate::output::{create_formatter, OutputWriter, StdoutWriter};
use clap::CommandFactory;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Generate barrel files for the given directories
    Generate(Args),
    /// Initialize a default configuration file
    Init,
    /// No directory was given
    MissingPaths,
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            return Command::Init;
        }

        if args.paths.is_empty() {
            return Command::MissingPaths;
        }

        Command::Generate(args)
    }

    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Command::Init => init_config(Path::new(DEFAULT_CONFIG_FILE)),
            Command::MissingPaths => {
                let usage = Args::command().render_usage().to_string();
                StdoutWriter.write(&format!("{}\n", usage))?;
                Err(BarrelError::NoPaths)
            }
            Command::Generate(args) => generate(args),
        }
    }
}

/// Write the default configuration file unless one already exists
fn init_config(path: &Path) -> Result<()> {
    let stdout = StdoutWriter;

    if path.exists() {
        stdout.write(&format!(
            "Configuration file already exists at: {}\nTo recreate it, delete the file first.\n",
            path.display()
        ))?;
        return Ok(());
    }

    create_default_config(path)?;
    stdout.write(&format!(
        "Created default configuration file at: {}\n",
        path.display()
    ))
}

/// Resolve a command-line path against the working directory
pub fn resolve_root(path: &Path, current_dir: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        current_dir.join(path)
    }
}

/// Generate barrels for every path in order, one path's failure never stopping the next
fn generate(args: Args) -> Result<()> {
    let settings = config::load_config(CliArgs::from(&args))?;
    debug!(?settings, "settings loaded");

    let current_dir =
        std::env::current_dir().with_context(|| "Cannot determine the working directory")?;
    let generator = BarrelGenerator::new(settings.clone());
    let formatter = create_formatter(
        &settings.output_format,
        settings.use_colors,
        settings.verbose,
        settings.quiet,
    );
    let stdout = StdoutWriter;
    let mut summary = RunSummary::new();

    for path in &args.paths {
        let root = resolve_root(path, &current_dir);

        match generator.generate(&root) {
            Ok(report) => {
                let text = formatter.format_report(&report)?;
                if !text.is_empty() {
                    stdout.write(&text)?;
                }
                summary.add_report(report);
            }
            Err(err) => {
                if err.is_critical() {
                    return Err(err);
                }
                summary.add_failure(&root, err.user_message());
                handle_error(err);
            }
        }
    }

    let text = formatter.format_summary(&summary)?;
    if !text.is_empty() {
        stdout.write(&text)?;
    }

    Ok(())
}
