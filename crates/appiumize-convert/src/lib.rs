//! appiumize-convert: Perfecto to Appium conversion of files and trees
//!
//! This crate provides:
//! - `Converter`: The facade for single-file and whole-tree conversion
//! - `TreeWalker`: The recursive, structure-preserving walk
//! - `classify()`: The extension allow-list deciding what gets converted
//! - `ConversionReport`: Per-file outcomes and counts of a job

mod classify;
mod error;
mod exclude;
mod file;
mod report;
mod walker;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use appiumize_core::{EditError, InvalidRuleError};
use appiumize_rules::{RuleRegistry, SubstitutionEngine};
use tracing::{info, warn};

pub use classify::{classify, FileKind, CODE_EXTENSIONS};
pub use error::ConvertError;
pub use exclude::ExcludeSet;
pub use file::{default_output_path, OUTPUT_PREFIX};
pub use report::{ConversionReport, CopyReason, FileOutcome, FileRecord, FolderFailure};
pub use walker::{TreeWalker, WalkOptions};

/// Result of converting a tree into its derived output folder
#[derive(Debug, Clone)]
pub struct TreeConversion {
    pub output_root: PathBuf,
    pub report: ConversionReport,
}

/// Converts files and directory trees with an owned rule registry
#[derive(Debug, Clone)]
pub struct Converter {
    engine: SubstitutionEngine,
    options: WalkOptions,
}

impl Converter {
    pub fn new(registry: Arc<RuleRegistry>) -> Self {
        Self {
            engine: SubstitutionEngine::new(registry),
            options: WalkOptions::default(),
        }
    }

    /// A converter using the built-in Perfecto to Appium rules
    pub fn with_builtin_rules() -> Self {
        Self::new(Arc::new(RuleRegistry::builtin()))
    }

    pub fn with_options(mut self, options: WalkOptions) -> Self {
        self.options = options;
        self
    }

    pub fn registry(&self) -> &Arc<RuleRegistry> {
        self.engine.registry()
    }

    /// Append a rule; it applies after every rule already registered
    pub fn add_rule(&self, pattern: &str, template: &str) -> Result<(), InvalidRuleError> {
        self.registry().add_pattern(pattern, template)
    }

    /// Convert a text blob
    pub fn convert_text(&self, text: &str) -> Result<String, EditError> {
        self.engine.convert(text)
    }

    /// Convert one file, reporting success as a flag
    ///
    /// Returns `true` once `output` holds the converted content, or the
    /// original content when conversion fell back to a copy. Returns `false`
    /// when the input is missing or the output cannot be written.
    pub fn convert(&self, input: &Path, output: &Path) -> bool {
        match self.convert_file(input, output) {
            Ok(FileOutcome::Converted { .. } | FileOutcome::Copied { .. }) => true,
            Ok(FileOutcome::Failed { .. }) => false,
            Err(e) => {
                warn!(input = %input.display(), error = %e, "file conversion failed");
                false
            }
        }
    }

    /// Convert one file regardless of its extension
    pub fn convert_file(&self, input: &Path, output: &Path) -> Result<FileOutcome, ConvertError> {
        let rules = self.registry().list();
        file::convert_file(&rules, input, output)
    }

    /// Convert a tree into the sibling folder `converted_<name>`
    ///
    /// An existing output folder is emptied first.
    pub fn convert_tree(&self, input_root: &Path) -> Result<TreeConversion, ConvertError> {
        let output_root = tree_output_path(input_root)?;
        walker::check_roots(input_root, &output_root)?;

        if fs::symlink_metadata(&output_root).is_ok() {
            info!(output = %output_root.display(), "cleaning existing output folder");
            clear_output(&output_root).map_err(|e| ConvertError::io(&output_root, e))?;
        }

        let report = self.convert_tree_into(input_root, &output_root)?;
        Ok(TreeConversion {
            output_root,
            report,
        })
    }

    /// Convert a tree into `output_root`, overwriting files that already
    /// exist there
    pub fn convert_tree_into(
        &self,
        input_root: &Path,
        output_root: &Path,
    ) -> Result<ConversionReport, ConvertError> {
        let rules = self.registry().list();
        let report = TreeWalker::new(&rules, &self.options).walk(input_root, output_root)?;

        info!(
            files = report.file_count(),
            converted = report.converted_count(),
            copied = report.copied_count(),
            folders = report.folders,
            "conversion completed"
        );
        Ok(report)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::with_builtin_rules()
    }
}

/// Output folder for `convert_tree`: `converted_<name>` next to the input
pub fn tree_output_path(input_root: &Path) -> Result<PathBuf, ConvertError> {
    // "." and ".." have no file name of their own
    if input_root.file_name().is_some() {
        return default_output_path(input_root);
    }
    let resolved = input_root
        .canonicalize()
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ConvertError::InputNotFound(input_root.to_path_buf()),
            _ => ConvertError::io(input_root, e),
        })?;
    default_output_path(&resolved)
}

/// Remove everything inside `dir`; a non-directory at that path is removed
fn clear_output(dir: &Path) -> io::Result<()> {
    let meta = fs::symlink_metadata(dir)?;
    if !meta.is_dir() {
        return fs::remove_file(dir);
    }

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(&path)?;
        } else {
            fs::remove_file(&path)?;
        }
    }
    Ok(())
}
