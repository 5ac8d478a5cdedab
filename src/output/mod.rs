//! Output formatting and writing functionality

mod formatters;
mod writers;

pub use self::writers::{FileWriter, OutputWriter, StdoutWriter};

use crate::error::Result;
use crate::models::config::OutputFormat;
use crate::models::report::{GenerationReport, RunSummary};

/// Trait for different output formatters
pub trait Formatter {
    /// Format the result of one scan root, printed as soon as it completes.
    /// Formatters that emit a single document return an empty string.
    fn format_report(&self, report: &GenerationReport) -> Result<String>;

    /// Format the whole run, printed once after every root was processed
    fn format_summary(&self, summary: &RunSummary) -> Result<String>;
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    pub use_colors: bool,
    pub verbose: bool,
    pub quiet: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(use_colors: bool, verbose: bool, quiet: bool) -> Self {
        Self {
            use_colors,
            verbose,
            quiet,
        }
    }
}

impl Formatter for TextFormatter {
    fn format_report(&self, report: &GenerationReport) -> Result<String> {
        Ok(formatters::format_report_text(
            report,
            self.use_colors,
            self.verbose,
            self.quiet,
        ))
    }

    fn format_summary(&self, summary: &RunSummary) -> Result<String> {
        Ok(formatters::format_summary_text(summary, self.use_colors, self.quiet))
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for JsonFormatter {
    fn format_report(&self, _report: &GenerationReport) -> Result<String> {
        Ok(String::new())
    }

    fn format_summary(&self, summary: &RunSummary) -> Result<String> {
        formatters::format_summary_json(summary)
    }
}

/// Create a formatter based on the output format
pub fn create_formatter(
    format: &OutputFormat,
    use_colors: bool,
    verbose: bool,
    quiet: bool,
) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(use_colors, verbose, quiet)),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
    }
}
