//! Rule definitions: a compiled pattern paired with a replacement template

use std::borrow::Cow;
use std::fmt;

use regex::Regex;
use thiserror::Error;

use crate::edit::{apply_edits, Edit, EditError};
use crate::template::Template;

/// Errors raised when a rule cannot be built
#[derive(Error, Debug)]
pub enum InvalidRuleError {
    #[error("Invalid rule format: a pattern is required")]
    MissingPattern,

    #[error("Invalid rule format: a replacement template is required")]
    MissingTemplate,

    #[error("Invalid pattern `{pattern}`: {source}")]
    BadPattern {
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },

    #[error("Template references group {group} but the pattern only has {available} group(s)")]
    UnknownGroup { group: usize, available: usize },
}

/// A single conversion rule
///
/// The pattern is applied globally: every non-overlapping match in the
/// text is replaced by the template expanded with that match's groups.
#[derive(Clone)]
pub struct RuleDefinition {
    name: String,
    description: String,
    regex: Regex,
    template: Template,
}

/// Result of running one rule over a text
#[derive(Debug)]
pub struct RuleApplication<'t> {
    /// The text after substitution (borrowed when nothing matched)
    pub text: Cow<'t, str>,
    /// Number of matches replaced
    pub replacements: usize,
}

impl RuleDefinition {
    /// Compile a rule, validating the template against the pattern's groups
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        pattern: &str,
        template: &str,
    ) -> Result<Self, InvalidRuleError> {
        if pattern.is_empty() {
            return Err(InvalidRuleError::MissingPattern);
        }
        if template.is_empty() {
            return Err(InvalidRuleError::MissingTemplate);
        }

        let regex = Regex::new(pattern).map_err(|source| InvalidRuleError::BadPattern {
            pattern: pattern.to_string(),
            source: Box::new(source),
        })?;
        let template = Template::parse(template, regex.captures_len() - 1)?;

        Ok(Self {
            name: name.into(),
            description: description.into(),
            regex,
            template,
        })
    }

    /// The rule identifier (e.g., "click_by_id")
    pub fn name(&self) -> &str {
        &self.name
    }

    /// A short description of what this rule does
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The pattern source
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Number of capture groups in the pattern
    pub fn group_count(&self) -> usize {
        self.regex.captures_len() - 1
    }

    /// Find every match in `text` and return the edits that would replace them
    pub fn edits(&self, text: &str) -> Vec<Edit> {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let mut replacement = String::new();
                self.template.expand(&caps, &mut replacement);
                Some(Edit::new(whole.range(), replacement, self.name.as_str()))
            })
            .collect()
    }

    /// Replace every match of this rule in `text`
    pub fn apply<'t>(&self, text: &'t str) -> Result<RuleApplication<'t>, EditError> {
        let edits = self.edits(text);
        if edits.is_empty() {
            return Ok(RuleApplication {
                text: Cow::Borrowed(text),
                replacements: 0,
            });
        }

        let replaced = apply_edits(text, &edits)?;
        Ok(RuleApplication {
            text: Cow::Owned(replaced),
            replacements: edits.len(),
        })
    }
}

impl fmt::Debug for RuleDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleDefinition")
            .field("name", &self.name)
            .field("pattern", &self.regex.as_str())
            .field("template", &self.template.as_str())
            .finish()
    }
}
