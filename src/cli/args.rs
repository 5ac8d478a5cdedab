//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// barrelgen - generate barrel files re-exporting default exports
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "barrelgen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate barrel files that re-export the default exports of a directory")]
#[command(long_about = "barrelgen scans each given directory and its immediate subdirectories for \
JavaScript and TypeScript modules with a default export, and writes an index file re-exporting \
each of them under its inferred name. Modules are found directly in the directory, or as the single \
index file of a subdirectory.")]
#[command(after_help = "EXAMPLES:

Basic Usage:
    # Generate src/components/index.ts (or index.js)
    barrelgen src/components

    # Several directories, processed one after another
    barrelgen src/components src/hooks

Output Options:
    # Show what would be written without touching the filesystem
    barrelgen --dry-run src/components

    # Machine-readable report
    barrelgen --output json src/components

Configuration:
    # Create a .barrelgen.toml in the current directory
    barrelgen --init

    # Use a specific configuration file
    barrelgen --config ./barrelgen.toml src/components

    # Write into a subdirectory instead of the scanned directory
    BARRELGEN_OUTPUT_MODE=subdirectory barrelgen src/components
")]
pub struct Args {
    /// Directories to scan
    #[arg(value_name = "PATHS", help = "Directories to scan, absolute or relative to the working directory")]
    pub paths: Vec<PathBuf>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to configuration file (defaults to .barrelgen.toml in the current directory if not specified)")]
    pub config: Option<PathBuf>,

    /// Initialize a default configuration file
    #[arg(long, help = "Create a default configuration file (.barrelgen.toml) in the current directory")]
    pub init: bool,

    /// Suppress non-essential output
    #[arg(short, long, conflicts_with = "verbose", help = "Only report conflicts and errors")]
    pub quiet: bool,

    /// Show detailed output
    #[arg(short, long, help = "List every export and skipped entry, and log walk decisions")]
    pub verbose: bool,

    /// Plan without writing
    #[arg(long, help = "Print the barrel file instead of writing it")]
    pub dry_run: bool,

    /// Output format (text, json)
    #[arg(short, long, value_enum, help = "Report format: 'text' for humans, 'json' for tools")]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, help = "Disable colored output (useful for terminals that don't support ANSI colors or for piping output)")]
    pub no_colors: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
