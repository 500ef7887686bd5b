//! Per-file outcomes and aggregate counts of a conversion job

use std::path::PathBuf;

use appiumize_rules::RuleHit;
use serde::Serialize;

/// Why a file was copied instead of converted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "detail", rename_all = "snake_case")]
pub enum CopyReason {
    /// Extension is not on the code allow-list
    Opaque,
    /// Matched an exclusion glob
    Excluded,
    /// Conversion failed; the original bytes were copied instead
    Fallback(String),
}

/// What happened to one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileOutcome {
    Converted {
        replacements: usize,
        hits: Vec<RuleHit>,
    },
    Copied {
        #[serde(flatten)]
        reason: CopyReason,
    },
    /// Neither conversion nor the fallback copy succeeded
    Failed { error: String },
}

impl FileOutcome {
    pub fn copied(reason: CopyReason) -> Self {
        Self::Copied { reason }
    }

    pub fn is_converted(&self) -> bool {
        matches!(self, Self::Converted { .. })
    }
}

/// Outcome of one file, keyed by its path relative to the input root
#[derive(Debug, Clone, Serialize)]
pub struct FileRecord {
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

/// A directory that could not be listed or mirrored
#[derive(Debug, Clone, Serialize)]
pub struct FolderFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Everything a tree conversion did
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConversionReport {
    /// Files in walk order
    pub files: Vec<FileRecord>,
    /// Subdirectories mirrored (the root is not counted)
    pub folders: usize,
    pub folder_failures: Vec<FolderFailure>,
}

impl ConversionReport {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn converted_count(&self) -> usize {
        self.files.iter().filter(|f| f.outcome.is_converted()).count()
    }

    pub fn copied_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, FileOutcome::Copied { .. }))
            .count()
    }

    pub fn fallback_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| {
                matches!(
                    f.outcome,
                    FileOutcome::Copied {
                        reason: CopyReason::Fallback(_)
                    }
                )
            })
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| matches!(f.outcome, FileOutcome::Failed { .. }))
            .count()
    }

    /// Total replacements across converted files
    pub fn replacements(&self) -> usize {
        self.files
            .iter()
            .map(|f| match &f.outcome {
                FileOutcome::Converted { replacements, .. } => *replacements,
                _ => 0,
            })
            .sum()
    }

    /// True when a file or a directory could not be written at all
    pub fn has_failures(&self) -> bool {
        self.failed_count() > 0 || !self.folder_failures.is_empty()
    }
}
