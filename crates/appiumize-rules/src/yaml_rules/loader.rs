//! YAML rule loader
//!
//! Load YAML rules from files, directories, or strings. Every rule is
//! validated and compiled on load, so a loaded rule is always executable.

use std::fs;
use std::path::Path;

use appiumize_core::InvalidRuleError;
use thiserror::Error;

use super::schema::YamlRule;
use super::verify::CompiledRule;

/// Errors that can occur when loading YAML rules
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid rule: {0}")]
    Validation(String),

    #[error("Invalid rule `{rule}`: {source}")]
    Invalid {
        rule: String,
        #[source]
        source: InvalidRuleError,
    },
}

/// Load one rule or a list of rules from a string
pub fn load_rules_from_string(yaml: &str) -> Result<Vec<CompiledRule>, LoadError> {
    // A single mapping first, then a sequence
    if let Ok(rule) = serde_yaml::from_str::<YamlRule>(yaml) {
        return Ok(vec![compile(rule)?]);
    }

    let rules: Vec<YamlRule> = serde_yaml::from_str(yaml)?;
    rules.into_iter().map(compile).collect()
}

/// Load YAML rules from a file
pub fn load_rules_from_file(path: &Path) -> Result<Vec<CompiledRule>, LoadError> {
    let content = fs::read_to_string(path)?;
    load_rules_from_string(&content)
}

/// Load all `.yaml`/`.yml` rule files in a directory tree
///
/// Files are visited in name order so rule order is stable. A file that
/// fails to load is skipped with a warning.
pub fn load_rules_from_dir(dir: &Path) -> Result<Vec<CompiledRule>, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Directory not found: {}", dir.display()),
        )));
    }

    let mut all_rules = Vec::new();
    walk_dir(dir, &mut all_rules)?;
    Ok(all_rules)
}

fn walk_dir(dir: &Path, rules: &mut Vec<CompiledRule>) -> Result<(), LoadError> {
    let mut paths = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()?;
    paths.sort();

    for path in paths {
        if path.is_dir() {
            walk_dir(&path, rules)?;
        } else if is_yaml(&path) {
            match load_rules_from_file(&path) {
                Ok(loaded) => rules.extend(loaded),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping rule file");
                }
            }
        }
    }

    Ok(())
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

fn compile(rule: YamlRule) -> Result<CompiledRule, LoadError> {
    rule.validate().map_err(LoadError::Validation)?;
    let name = rule.name.clone();
    CompiledRule::new(rule).map_err(|source| LoadError::Invalid { rule: name, source })
}
