//! Output formatting for appiumize
//!
//! Supports text (colored terminal) and JSON output formats.

use appiumize_convert::{CopyReason, FileOutcome, FolderFailure};
use colored::*;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<OutputFormat> {
        match s.to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Result of one file, as reported
#[derive(Debug, Clone, Serialize)]
pub struct FileResult {
    pub path: String,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

/// Summary statistics
#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    pub files_processed: usize,
    pub files_converted: usize,
    pub files_copied: usize,
    pub fallbacks: usize,
    pub total_replacements: usize,
    pub errors: usize,
}

/// Full JSON output structure
#[derive(Debug, Serialize)]
pub struct JsonOutput {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    pub summary: Summary,
    pub files: Vec<FileResult>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub folder_failures: Vec<FolderFailure>,
}

/// Reporter for accumulating and outputting results
pub struct Reporter {
    format: OutputFormat,
    verbose: bool,
    output: Option<PathBuf>,
    results: Vec<FileResult>,
    folder_failures: Vec<FolderFailure>,
    summary: Summary,
}

impl Reporter {
    pub fn new(format: OutputFormat, verbose: bool) -> Self {
        Self {
            format,
            verbose,
            output: None,
            results: Vec::new(),
            folder_failures: Vec::new(),
            summary: Summary::default(),
        }
    }

    /// Where the converted output was written
    pub fn set_output(&mut self, path: &Path) {
        self.output = Some(path.to_path_buf());
    }

    /// Report the outcome of one file
    pub fn report_file(&mut self, path: &Path, outcome: FileOutcome) {
        self.summary.files_processed += 1;

        match &outcome {
            FileOutcome::Converted { replacements, .. } => {
                self.summary.files_converted += 1;
                self.summary.total_replacements += replacements;
                if self.format == OutputFormat::Text && (self.verbose || *replacements > 0) {
                    println!(
                        "  {} {} ({} replacement(s))",
                        "Converted".green(),
                        path.display(),
                        replacements
                    );
                }
            }
            FileOutcome::Copied { reason } => {
                self.summary.files_copied += 1;
                if let CopyReason::Fallback(error) = reason {
                    self.summary.fallbacks += 1;
                    if self.format == OutputFormat::Text {
                        eprintln!(
                            "{}: {} - {} (copied unchanged)",
                            "Warning".yellow(),
                            path.display(),
                            error
                        );
                    }
                } else if self.verbose && self.format == OutputFormat::Text {
                    println!("  {} {} ({})", "Copied".dimmed(), path.display(), reason_label(reason));
                }
            }
            FileOutcome::Failed { error } => {
                self.summary.errors += 1;
                if self.format == OutputFormat::Text {
                    eprintln!("{}: {} - {}", "Error".red(), path.display(), error);
                }
            }
        }

        self.results.push(FileResult {
            path: path.display().to_string(),
            outcome,
        });
    }

    /// Report a directory that could not be read or mirrored
    pub fn report_folder_failure(&mut self, failure: FolderFailure) {
        self.summary.errors += 1;
        if self.format == OutputFormat::Text {
            eprintln!(
                "{}: {} - {}",
                "Error".red(),
                failure.path.display(),
                failure.error
            );
        }
        self.folder_failures.push(failure);
    }

    /// Print final summary/output
    pub fn finish(self) {
        match self.format {
            OutputFormat::Text => {
                println!();
                println!("{}", "Summary".bold().underline());
                println!("  Files processed: {}", self.summary.files_processed);
                println!("  Files converted: {}", self.summary.files_converted);
                println!("  Files copied: {}", self.summary.files_copied);
                println!("  Total replacements: {}", self.summary.total_replacements);
                if self.summary.fallbacks > 0 {
                    println!("  Fallback copies: {}", self.summary.fallbacks);
                }
                if self.summary.errors > 0 {
                    println!("  Errors: {}", self.summary.errors);
                }
                if let Some(output) = &self.output {
                    println!();
                    println!("{}: {}", "Output".bold(), output.display());
                }
            }
            OutputFormat::Json => {
                let output = self.into_json();
                match serde_json::to_string_pretty(&output) {
                    Ok(json) => println!("{}", json),
                    Err(e) => eprintln!("{}: {}", "Error".red(), e),
                }
            }
        }
    }

    fn into_json(self) -> JsonOutput {
        JsonOutput {
            version: env!("CARGO_PKG_VERSION").to_string(),
            output: self.output.map(|p| p.display().to_string()),
            summary: self.summary,
            files: self.results,
            folder_failures: self.folder_failures,
        }
    }

    /// Get summary for exit code determination
    pub fn summary(&self) -> &Summary {
        &self.summary
    }
}

fn reason_label(reason: &CopyReason) -> &'static str {
    match reason {
        CopyReason::Opaque => "not a code file",
        CopyReason::Excluded => "excluded",
        CopyReason::Fallback(_) => "fallback",
    }
}

/// Unified diff (diff -u compatible) between old and new content
pub fn unified_diff(path: &Path, old: &str, new: &str) -> String {
    use similar::{ChangeTag, TextDiff};

    let diff = TextDiff::from_lines(old, new);
    let path_str = path.display().to_string();
    let mut out = String::new();

    out.push_str(&format!("--- a/{}\n", path_str));
    out.push_str(&format!("+++ b/{}\n", path_str));

    for hunk in diff.unified_diff().context_radius(3).iter_hunks() {
        out.push_str(&format!("{}\n", hunk.header()));
        for change in hunk.iter_changes() {
            let sign = match change.tag() {
                ChangeTag::Delete => "-",
                ChangeTag::Insert => "+",
                ChangeTag::Equal => " ",
            };
            out.push_str(sign);
            out.push_str(&change.to_string());
            if change.missing_newline() {
                out.push('\n');
            }
        }
    }

    out
}

/// Print a unified diff, coloring added and removed lines
pub fn print_unified_diff(path: &Path, old: &str, new: &str) {
    for line in unified_diff(path, old, new).lines() {
        if line.starts_with("+++") || line.starts_with("---") {
            println!("{}", line.bold());
        } else if line.starts_with('+') {
            println!("{}", line.green());
        } else if line.starts_with('-') {
            println!("{}", line.red());
        } else if line.starts_with("@@") {
            println!("{}", line.cyan());
        } else {
            println!("{}", line);
        }
    }
}
