//! Substitution engine: runs every registered rule over a text, in order
//!
//! Each rule's output is the next rule's input. The result is fully
//! determined by the input text and the ordered rules. It is not
//! idempotent in general: a rule may match text an earlier rule produced,
//! so converting already converted text can change it again.

use std::sync::Arc;

use appiumize_core::{EditError, RuleDefinition};
use serde::Serialize;

use crate::registry::RuleRegistry;

/// How often one rule matched during a conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleHit {
    pub rule: String,
    pub count: usize,
}

/// Converted text together with the rules that fired
#[derive(Debug, Clone)]
pub struct Conversion {
    pub text: String,
    /// Rules that matched at least once, in application order
    pub hits: Vec<RuleHit>,
}

impl Conversion {
    /// Total number of replacements across all rules
    pub fn replacements(&self) -> usize {
        self.hits.iter().map(|h| h.count).sum()
    }

    pub fn is_changed(&self) -> bool {
        !self.hits.is_empty()
    }
}

/// Applies a `RuleRegistry` to text
#[derive(Debug, Clone)]
pub struct SubstitutionEngine {
    registry: Arc<RuleRegistry>,
}

impl SubstitutionEngine {
    pub fn new(registry: Arc<RuleRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<RuleRegistry> {
        &self.registry
    }

    /// Convert `text` with the rules registered when the call starts
    pub fn convert(&self, text: &str) -> Result<String, EditError> {
        self.convert_with_trace(text).map(|c| c.text)
    }

    /// Convert `text` and record which rules matched
    pub fn convert_with_trace(&self, text: &str) -> Result<Conversion, EditError> {
        let rules = self.registry.list();
        apply_rules(&rules, text)
    }
}

/// Fold `rules` over `text` in order
pub fn apply_rules(rules: &[Arc<RuleDefinition>], text: &str) -> Result<Conversion, EditError> {
    let mut current = text.to_string();
    let mut hits = Vec::new();

    for rule in rules {
        let applied = rule.apply(&current)?;
        if applied.replacements == 0 {
            continue;
        }
        hits.push(RuleHit {
            rule: rule.name().to_string(),
            count: applied.replacements,
        });
        current = applied.text.into_owned();
    }

    Ok(Conversion {
        text: current,
        hits,
    })
}
