//! Output formatting functionality
//!
//! This module renders generation reports as console text or JSON.

use crate::error::Result;
use crate::models::barrel::ExtensionFamily;
use crate::models::report::{BarrelOutcome, GenerationReport, RunSummary};
use ansi_term::Colour::{Cyan, Green, Red, Yellow};
use ansi_term::Style;
use std::path::{Path, PathBuf};

fn paint_path(path: &Path, use_colors: bool) -> String {
    if use_colors {
        Cyan.paint(path.display().to_string()).to_string()
    } else {
        path.display().to_string()
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

fn format_family_files(
    output: &mut String,
    family: ExtensionFamily,
    files: &[PathBuf],
    use_colors: bool,
) {
    output.push_str(&format!("  {} files:\n", family));
    for file in files {
        if use_colors {
            output.push_str(&format!("    {}\n", Style::new().dimmed().paint(file.display().to_string())));
        } else {
            output.push_str(&format!("    {}\n", file.display()));
        }
    }
}

/// Format the notice for one scan root
pub fn format_report_text(report: &GenerationReport, use_colors: bool, verbose: bool, quiet: bool) -> String {
    let mut output = String::new();
    let exports = plural(report.statements.len(), "export");

    match &report.outcome {
        BarrelOutcome::Written { path, .. } => {
            if !quiet {
                let mark = if use_colors { Green.paint("✓").to_string() } else { "OK".to_string() };
                output.push_str(&format!("{} Wrote {} ({})\n", mark, paint_path(path, use_colors), exports));
            }
        }
        BarrelOutcome::DryRun { path, contents, .. } => {
            if !quiet {
                let header = format!("Would write {} ({}):", path.display(), exports);
                if use_colors {
                    output.push_str(&format!("{}\n", Yellow.bold().paint(header)));
                } else {
                    output.push_str(&format!("{}\n", header));
                }
                output.push_str(contents);
                output.push('\n');
            }
        }
        BarrelOutcome::NothingFound => {
            if !quiet {
                let notice = format!("No default exports found in {}", report.root.display());
                if use_colors {
                    output.push_str(&format!("{}\n", Yellow.paint(notice)));
                } else {
                    output.push_str(&format!("{}\n", notice));
                }
            }
        }
        BarrelOutcome::FamilyConflict { script, typed } => {
            let notice = format!(
                "Mixed module types in {}: found both {} and {} files, no barrel written",
                report.root.display(),
                ExtensionFamily::Script,
                ExtensionFamily::Typed
            );
            if use_colors {
                output.push_str(&format!("{}\n", Red.bold().paint(notice)));
            } else {
                output.push_str(&format!("{}\n", notice));
            }
            format_family_files(&mut output, ExtensionFamily::Script, script, use_colors);
            format_family_files(&mut output, ExtensionFamily::Typed, typed, use_colors);
        }
    }

    if verbose && !quiet {
        for statement in &report.statements {
            output.push_str(&format!("  {} <- {}\n", statement.name, statement.source.display()));
        }
        for skipped in &report.skipped {
            let line = format!("  skipped {}: {}", skipped.path.display(), skipped.reason);
            if use_colors {
                output.push_str(&format!("{}\n", Style::new().dimmed().paint(line)));
            } else {
                output.push_str(&format!("{}\n", line));
            }
        }
    }

    output
}

/// Format the footer for a whole run
pub fn format_summary_text(summary: &RunSummary, use_colors: bool, quiet: bool) -> String {
    if quiet || summary.total_paths() < 2 {
        return String::new();
    }

    let mut line = format!(
        "{} produced for {}",
        plural(summary.barrels_produced(), "barrel"),
        plural(summary.total_paths(), "path")
    );
    if !summary.failures.is_empty() {
        line.push_str(&format!(", {} failed", summary.failures.len()));
    }

    if use_colors {
        format!("{}\n", Style::new().bold().paint(line))
    } else {
        format!("{}\n", line)
    }
}

/// Format a run summary as pretty JSON
pub fn format_summary_json(summary: &RunSummary) -> Result<String> {
    let mut json = serde_json::to_string_pretty(summary)?;
    json.push('\n');
    Ok(json)
}
