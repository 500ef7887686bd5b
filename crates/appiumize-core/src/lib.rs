//! appiumize-core: Core abstractions for rule-based script conversion
//!
//! This crate provides:
//! - `Edit`: A byte-range text replacement produced by one rule match
//! - `apply_edits()`: Function to apply non-overlapping edits in one pass
//! - `Template`: A replacement template with validated group placeholders
//! - `RuleDefinition`: A compiled pattern paired with its template

mod edit;
mod rule;
mod template;

pub use edit::{apply_edits, Edit, EditError};
pub use rule::{InvalidRuleError, RuleApplication, RuleDefinition};
pub use template::{Segment, Template};
