//! Recursive, structure-preserving tree conversion
//!
//! Every entry of the input tree gets a counterpart at the same relative
//! path in the output tree. Failures are isolated: a file that cannot be
//! converted is copied, and a directory that cannot be read or mirrored is
//! recorded while its siblings continue.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use appiumize_core::RuleDefinition;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::classify::{classify, FileKind};
use crate::error::ConvertError;
use crate::exclude::ExcludeSet;
use crate::file::{copy_file, transform_file};
use crate::report::{ConversionReport, CopyReason, FileOutcome, FileRecord, FolderFailure};

/// Options for a tree conversion
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Convert the files of each directory on the rayon pool
    pub parallel: bool,
    /// Files matching these globs are copied unchanged
    pub exclude: ExcludeSet,
}

/// Walks an input tree and mirrors it, converted, into an output tree
pub struct TreeWalker<'a> {
    rules: &'a [Arc<RuleDefinition>],
    options: &'a WalkOptions,
}

struct Entry {
    name: std::ffi::OsString,
    path: PathBuf,
    is_dir: io::Result<bool>,
}

impl<'a> TreeWalker<'a> {
    pub fn new(rules: &'a [Arc<RuleDefinition>], options: &'a WalkOptions) -> Self {
        Self { rules, options }
    }

    /// Convert `input_root` into `output_root`
    ///
    /// Fails before producing any output when the input root is missing or
    /// not a directory, or when the output root lies inside it.
    pub fn walk(&self, input_root: &Path, output_root: &Path) -> Result<ConversionReport, ConvertError> {
        check_roots(input_root, output_root)?;
        fs::create_dir_all(output_root).map_err(|e| ConvertError::io(output_root, e))?;

        info!(
            input = %input_root.display(),
            output = %output_root.display(),
            parallel = self.options.parallel,
            "converting tree"
        );

        let root = input_root
            .canonicalize()
            .map_err(|e| ConvertError::io(input_root, e))?;
        let mut ancestors = vec![root];
        let mut report = ConversionReport::default();
        self.walk_dir(input_root, output_root, Path::new(""), &mut ancestors, &mut report);
        Ok(report)
    }

    /// `ancestors` holds the canonical paths of `input_dir` and every
    /// directory above it in this walk
    fn walk_dir(
        &self,
        input_dir: &Path,
        output_dir: &Path,
        relative: &Path,
        ancestors: &mut Vec<PathBuf>,
        report: &mut ConversionReport,
    ) {
        let entries = match read_sorted(input_dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(dir = %input_dir.display(), error = %e, "cannot read directory");
                report.folder_failures.push(FolderFailure {
                    path: relative.to_path_buf(),
                    error: e.to_string(),
                });
                return;
            }
        };

        let (dirs, files): (Vec<Entry>, Vec<Entry>) = entries
            .into_iter()
            .partition(|entry| matches!(entry.is_dir, Ok(true)));

        let process = |entry: &Entry| {
            let rel = relative.join(&entry.name);
            let output = output_dir.join(&entry.name);
            let outcome = match &entry.is_dir {
                Err(e) => FileOutcome::Failed {
                    error: e.to_string(),
                },
                Ok(_) => self.process_file(&entry.path, &output, &rel),
            };
            FileRecord { path: rel, outcome }
        };

        let records: Vec<FileRecord> = if self.options.parallel {
            files.par_iter().map(process).collect()
        } else {
            files.iter().map(process).collect()
        };
        let file_count = records.len();
        report.files.extend(records);

        for dir in &dirs {
            let rel = relative.join(&dir.name);
            let mirror = output_dir.join(&dir.name);

            // A linked directory that leads back up the walk is not mirrored
            let canonical = match dir.path.canonicalize() {
                Ok(path) => path,
                Err(e) => {
                    warn!(dir = %dir.path.display(), error = %e, "cannot resolve directory");
                    report.folder_failures.push(FolderFailure {
                        path: rel,
                        error: e.to_string(),
                    });
                    continue;
                }
            };
            if ancestors.contains(&canonical) {
                warn!(dir = %dir.path.display(), target = %canonical.display(), "directory cycle");
                report.folder_failures.push(FolderFailure {
                    path: rel,
                    error: format!("directory cycle back to {}", canonical.display()),
                });
                continue;
            }

            if let Err(e) = fs::create_dir_all(&mirror) {
                warn!(dir = %mirror.display(), error = %e, "cannot create output directory");
                report.folder_failures.push(FolderFailure {
                    path: rel,
                    error: e.to_string(),
                });
                continue;
            }
            report.folders += 1;
            ancestors.push(canonical);
            self.walk_dir(&dir.path, &mirror, &rel, ancestors, report);
            ancestors.pop();
        }

        debug!(
            dir = %input_dir.display(),
            files = file_count,
            folders = dirs.len(),
            "processed directory"
        );
    }

    fn process_file(&self, input: &Path, output: &Path, relative: &Path) -> FileOutcome {
        if self.options.exclude.matches(relative) {
            return copy_file(input, output, CopyReason::Excluded);
        }

        match classify(input) {
            FileKind::Transformable => transform_file(self.rules, input, output),
            FileKind::Opaque => copy_file(input, output, CopyReason::Opaque),
        }
    }
}

/// Directory entries sorted by file name
fn read_sorted(dir: &Path) -> io::Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        // Follow symlinks, so a linked directory is walked like a real one;
        // cycles are caught in `walk_dir`
        let is_dir = fs::metadata(&path).map(|m| m.is_dir());
        entries.push(Entry {
            name: entry.file_name(),
            path,
            is_dir,
        });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

pub(crate) fn check_roots(input_root: &Path, output_root: &Path) -> Result<(), ConvertError> {
    let meta = fs::metadata(input_root).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ConvertError::InputNotFound(input_root.to_path_buf()),
        _ => ConvertError::io(input_root, e),
    })?;
    if !meta.is_dir() {
        return Err(ConvertError::NotADirectory(input_root.to_path_buf()));
    }

    let input = input_root
        .canonicalize()
        .map_err(|e| ConvertError::io(input_root, e))?;
    let output = resolve(output_root).map_err(|e| ConvertError::io(output_root, e))?;
    if output.starts_with(&input) {
        return Err(ConvertError::OutputInsideInput {
            input: input_root.to_path_buf(),
            output: output_root.to_path_buf(),
        });
    }
    Ok(())
}

/// Canonicalize a path that may not exist yet, through its nearest existing
/// ancestor
fn resolve(path: &Path) -> io::Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let mut missing = Vec::new();
    let mut current = absolute.as_path();
    loop {
        match current.canonicalize() {
            Ok(found) => {
                let mut resolved = found;
                for part in missing.iter().rev() {
                    resolved.push(part);
                }
                return Ok(resolved);
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let (Some(parent), Some(name)) = (current.parent(), current.file_name()) else {
                    return Err(e);
                };
                missing.push(name.to_os_string());
                current = parent;
            }
            Err(e) => return Err(e),
        }
    }
}
