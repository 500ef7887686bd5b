//! Byte-range text editing

use std::ops::Range;
use thiserror::Error;

/// Errors that can occur during edit application
#[derive(Error, Debug)]
pub enum EditError {
    #[error("Overlapping edits detected at offset {0}")]
    OverlappingEdits(usize),

    #[error("Edit range {start}..{end} out of bounds for text length {len}")]
    RangeOutOfBounds { start: usize, end: usize, len: usize },

    #[error("Edit range {start}..{end} does not fall on character boundaries")]
    NotCharBoundary { start: usize, end: usize },
}

/// Represents a single text replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// Byte range of the matched text
    pub range: Range<usize>,
    /// The replacement text
    pub replacement: String,
    /// Name of the rule that produced this edit
    pub rule: String,
}

impl Edit {
    /// Create a new edit
    pub fn new(range: Range<usize>, replacement: impl Into<String>, rule: impl Into<String>) -> Self {
        Self {
            range,
            replacement: replacement.into(),
            rule: rule.into(),
        }
    }

    /// Get the byte offset where this edit starts
    pub fn start_offset(&self) -> usize {
        self.range.start
    }

    /// Get the byte offset where this edit ends
    pub fn end_offset(&self) -> usize {
        self.range.end
    }
}

/// Apply edits to text
///
/// Edits are applied in reverse order (from end to start) to maintain
/// valid offsets throughout the process.
///
/// # Arguments
/// * `source` - The original text
/// * `edits` - Slice of edits to apply
///
/// # Returns
/// * `Ok(String)` - The modified text
/// * `Err(EditError)` - If edits overlap or are out of bounds
pub fn apply_edits(source: &str, edits: &[Edit]) -> Result<String, EditError> {
    if edits.is_empty() {
        return Ok(source.to_string());
    }

    // Sort edits by start position (descending) for safe replacement
    let mut sorted_edits: Vec<&Edit> = edits.iter().collect();
    sorted_edits.sort_by(|a, b| b.start_offset().cmp(&a.start_offset()));

    let source_len = source.len();
    let mut prev_start: Option<usize> = None;

    for edit in &sorted_edits {
        let start = edit.start_offset();
        let end = edit.end_offset();

        if end > source_len || start > end {
            return Err(EditError::RangeOutOfBounds {
                start,
                end,
                len: source_len,
            });
        }

        if !source.is_char_boundary(start) || !source.is_char_boundary(end) {
            return Err(EditError::NotCharBoundary { start, end });
        }

        if let Some(prev) = prev_start {
            if end > prev {
                return Err(EditError::OverlappingEdits(start));
            }
        }

        prev_start = Some(start);
    }

    let mut result = source.to_string();
    for edit in sorted_edits {
        result.replace_range(edit.range.clone(), &edit.replacement);
    }

    Ok(result)
}
