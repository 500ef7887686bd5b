//! appiumize-rules: Perfecto to Appium conversion rules
//!
//! This crate provides:
//! - `builtin`: The ordered table of built-in Perfecto to Appium rules
//! - `RuleRegistry`: The ordered, extendable rule list with snapshot reads
//! - `SubstitutionEngine`: Runs every registered rule over a text in order
//! - `yaml_rules`: User rules loaded from YAML files with inline tests

pub mod builtin;
pub mod engine;
pub mod registry;
pub mod yaml_rules;

pub use engine::{apply_rules, Conversion, RuleHit, SubstitutionEngine};
pub use registry::{RuleRegistry, RuleSet};
pub use yaml_rules::{load_rules_from_dir, load_rules_from_file, CompiledRule, LoadError};
