//! Decide which files go through the rule engine

use std::path::Path;

use serde::Serialize;

/// Extensions (lowercase, without the dot) of files that are converted
pub const CODE_EXTENSIONS: &[&str] = &[
    "java", "js", "ts", "txt", "py", "html", "xml", "json", "cs", "kt",
];

/// How a file is handled during tree conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    /// Read as text, converted and written
    Transformable,
    /// Copied byte for byte
    Opaque,
}

/// Classify a file by its extension alone
pub fn classify(path: &Path) -> FileKind {
    let is_code = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| CODE_EXTENSIONS.iter().any(|c| c.eq_ignore_ascii_case(ext)))
        .unwrap_or(false);

    if is_code {
        FileKind::Transformable
    } else {
        FileKind::Opaque
    }
}
