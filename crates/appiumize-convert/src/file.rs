//! Single-file conversion and atomic writes

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use appiumize_core::RuleDefinition;
use appiumize_rules::{apply_rules, Conversion};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::error::ConvertError;
use crate::report::{CopyReason, FileOutcome};

/// Prefix of every derived output name
pub const OUTPUT_PREFIX: &str = "converted_";

/// `converted_<name>` next to `input`
pub fn default_output_path(input: &Path) -> Result<PathBuf, ConvertError> {
    let name = input
        .file_name()
        .ok_or_else(|| ConvertError::NoFolderName(input.to_path_buf()))?;

    let mut output_name = std::ffi::OsString::from(OUTPUT_PREFIX);
    output_name.push(name);
    Ok(input.with_file_name(output_name))
}

/// Convert one file to `output`, falling back to a byte copy when the
/// content cannot be converted
///
/// The file is converted regardless of its extension. Only a missing input
/// or a failed write is an error.
pub fn convert_file(
    rules: &[Arc<RuleDefinition>],
    input: &Path,
    output: &Path,
) -> Result<FileOutcome, ConvertError> {
    let meta = fs::metadata(input).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ConvertError::InputNotFound(input.to_path_buf()),
        _ => ConvertError::io(input, e),
    })?;
    if !meta.is_file() {
        return Err(ConvertError::NotAFile(input.to_path_buf()));
    }

    let bytes = fs::read(input).map_err(|e| ConvertError::io(input, e))?;
    match transform_bytes(rules, &bytes) {
        Ok(conversion) => {
            write_atomic(output, conversion.text.as_bytes(), Some(&meta))
                .map_err(|e| ConvertError::io(output, e))?;
            debug!(input = %input.display(), replacements = conversion.replacements(), "converted");
            Ok(FileOutcome::Converted {
                replacements: conversion.replacements(),
                hits: conversion.hits,
            })
        }
        Err(reason) => {
            warn!(input = %input.display(), %reason, "conversion failed, copying original");
            write_atomic(output, &bytes, Some(&meta)).map_err(|e| ConvertError::io(output, e))?;
            Ok(FileOutcome::copied(CopyReason::Fallback(reason)))
        }
    }
}

/// Convert a transformable file inside a tree walk
///
/// Never returns an error: every failure ends in a fallback copy, or in
/// `Failed` when the copy fails too.
pub(crate) fn transform_file(
    rules: &[Arc<RuleDefinition>],
    input: &Path,
    output: &Path,
) -> FileOutcome {
    let bytes = match fs::read(input) {
        Ok(bytes) => bytes,
        Err(e) => return fallback(input, output, format!("read failed: {}", e)),
    };

    let conversion = match transform_bytes(rules, &bytes) {
        Ok(conversion) => conversion,
        Err(reason) => return fallback(input, output, reason),
    };

    let meta = fs::metadata(input).ok();
    match write_atomic(output, conversion.text.as_bytes(), meta.as_ref()) {
        Ok(()) => {
            debug!(input = %input.display(), replacements = conversion.replacements(), "converted");
            FileOutcome::Converted {
                replacements: conversion.replacements(),
                hits: conversion.hits,
            }
        }
        Err(e) => fallback(input, output, format!("write failed: {}", e)),
    }
}

/// Byte-copy `input` to `output`
pub(crate) fn copy_file(input: &Path, output: &Path, reason: CopyReason) -> FileOutcome {
    match copy_atomic(input, output) {
        Ok(()) => {
            debug!(input = %input.display(), ?reason, "copied");
            FileOutcome::copied(reason)
        }
        Err(e) => {
            warn!(input = %input.display(), error = %e, "copy failed");
            FileOutcome::Failed {
                error: e.to_string(),
            }
        }
    }
}

fn fallback(input: &Path, output: &Path, reason: String) -> FileOutcome {
    warn!(input = %input.display(), %reason, "conversion failed, copying original");
    copy_file(input, output, CopyReason::Fallback(reason))
}

fn transform_bytes(rules: &[Arc<RuleDefinition>], bytes: &[u8]) -> Result<Conversion, String> {
    let text = std::str::from_utf8(bytes).map_err(|e| format!("not valid UTF-8: {}", e))?;
    apply_rules(rules, text).map_err(|e| e.to_string())
}

fn copy_atomic(input: &Path, output: &Path) -> io::Result<()> {
    let bytes = fs::read(input)?;
    let meta = fs::metadata(input).ok();
    write_atomic(output, &bytes, meta.as_ref())
}

/// Write through a temporary file in the destination directory, then rename
///
/// Readers of `dest` see either the old file or the complete new one.
pub(crate) fn write_atomic(dest: &Path, bytes: &[u8], source: Option<&fs::Metadata>) -> io::Result<()> {
    let dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    if let Some(meta) = source {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    tmp.persist(dest).map_err(|e| e.error)?;
    Ok(())
}
