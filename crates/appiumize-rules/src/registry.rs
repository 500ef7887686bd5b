//! Ordered registry of conversion rules
//!
//! Insertion order is application order: later rules see the output of
//! earlier ones. Readers take a snapshot (`RuleSet`), so an append never
//! changes the rules of a conversion that already started.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use appiumize_core::{InvalidRuleError, RuleDefinition};
use parking_lot::RwLock;
use tracing::debug;

use crate::builtin;

/// An immutable, ordered snapshot of registered rules
pub type RuleSet = Arc<[Arc<RuleDefinition>]>;

/// Registry of active conversion rules
pub struct RuleRegistry {
    inner: RwLock<Inner>,
}

struct Inner {
    rules: RuleSet,
    /// Rules added through `add_pattern`, used for naming
    custom_count: usize,
}

impl Inner {
    fn push(&mut self, rule: RuleDefinition) {
        let mut rules: Vec<Arc<RuleDefinition>> = self.rules.iter().cloned().collect();
        rules.push(Arc::new(rule));
        self.rules = rules.into();
    }
}

impl RuleRegistry {
    /// Create a registry with no rules
    pub fn empty() -> Self {
        Self::from_rules(Vec::new())
    }

    /// Create a registry with all built-in Perfecto to Appium rules
    pub fn builtin() -> Self {
        Self::from_rules(builtin::compile())
    }

    /// Create a registry from already compiled rules, keeping their order
    pub fn from_rules(rules: Vec<RuleDefinition>) -> Self {
        let rules: Vec<Arc<RuleDefinition>> = rules.into_iter().map(Arc::new).collect();
        Self {
            inner: RwLock::new(Inner {
                rules: rules.into(),
                custom_count: 0,
            }),
        }
    }

    /// Current ordered rules
    pub fn list(&self) -> RuleSet {
        Arc::clone(&self.inner.read().rules)
    }

    /// Append a rule after all existing rules
    pub fn add(&self, rule: RuleDefinition) {
        debug!(rule = rule.name(), pattern = rule.pattern(), "registering rule");
        self.inner.write().push(rule);
    }

    /// Build an auto-named rule from a pattern and template and append it
    ///
    /// Nothing is registered when the rule is invalid.
    pub fn add_pattern(&self, pattern: &str, template: &str) -> Result<(), InvalidRuleError> {
        let mut inner = self.inner.write();
        let number = inner.custom_count + 1;
        let rule = RuleDefinition::new(
            format!("custom_{}", number),
            format!("Custom rule {}", pattern),
            pattern,
            template,
        )?;
        debug!(rule = rule.name(), pattern, "registering rule");
        inner.custom_count = number;
        inner.push(rule);
        Ok(())
    }

    /// Get all rule names in application order
    pub fn names(&self) -> Vec<String> {
        self.list().iter().map(|r| r.name().to_string()).collect()
    }

    /// Get all rules with their descriptions (for listing)
    pub fn list_rules(&self) -> Vec<(String, String)> {
        self.list()
            .iter()
            .map(|r| (r.name().to_string(), r.description().to_string()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A copy of this registry without the named rules
    pub fn without(&self, disabled: &HashSet<String>) -> Self {
        let inner = self.inner.read();
        let kept: Vec<Arc<RuleDefinition>> = inner
            .rules
            .iter()
            .filter(|r| !disabled.contains(r.name()))
            .cloned()
            .collect();
        Self {
            inner: RwLock::new(Inner {
                rules: kept.into(),
                custom_count: inner.custom_count,
            }),
        }
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.names())
            .finish()
    }
}
