//! YAML rule schema definitions

use appiumize_core::{InvalidRuleError, RuleDefinition};
use serde::{Deserialize, Serialize};

/// A rule as written in a YAML file
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct YamlRule {
    /// Unique rule identifier (e.g., "tap_by_accessibility")
    pub name: String,

    /// Human-readable description
    #[serde(default)]
    pub description: String,

    /// Regular expression to search for
    pub pattern: String,

    /// Replacement template with `$n` group references
    #[serde(alias = "replacement")]
    pub replace: String,

    /// Inline test cases
    #[serde(default)]
    pub tests: Vec<TestCase>,
}

/// A test case for a YAML rule
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TestCase {
    /// Input source text
    pub input: String,

    /// Expected output; `None` means the rule must not change the input
    #[serde(default)]
    pub output: Option<String>,

    /// Skip this test case
    #[serde(default)]
    pub skip: bool,
}

impl YamlRule {
    /// Check fields that the regex compiler does not
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Rule name is required".to_string());
        }
        Ok(())
    }

    /// Compile into an executable rule
    pub fn compile(&self) -> Result<RuleDefinition, InvalidRuleError> {
        RuleDefinition::new(
            self.name.clone(),
            self.description.clone(),
            &self.pattern,
            &self.replace,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rule_with_tests() {
        let yaml = r#"
name: tap_text
description: Tap by visible text
pattern: 'tapText\("([^"]+)"\)'
replace: 'driver.findElement(By.xpath("//*[@text=''$1'']")).click()'
tests:
  - input: 'tapText("OK")'
    output: 'driver.findElement(By.xpath("//*[@text=''OK'']")).click()'
  - input: 'tap("OK")'
    skip: true
"#;

        let rule: YamlRule = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rule.name, "tap_text");
        assert_eq!(rule.tests.len(), 2);
        assert!(rule.tests[0].output.is_some());
        assert!(rule.tests[1].skip);
        assert!(rule.tests[1].output.is_none());
    }

    #[test]
    fn test_replacement_alias() {
        let yaml = r#"
name: legacy
pattern: 'a'
replacement: 'b'
"#;
        let rule: YamlRule = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rule.replace, "b");
        assert!(rule.description.is_empty());
        assert!(rule.tests.is_empty());
    }

    #[test]
    fn test_compile_reports_unknown_group() {
        let rule = YamlRule {
            name: "bad".into(),
            description: String::new(),
            pattern: "(a)".into(),
            replace: "$2".into(),
            tests: vec![],
        };
        assert!(matches!(
            rule.compile(),
            Err(InvalidRuleError::UnknownGroup { group: 2, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let rule = YamlRule {
            name: "  ".into(),
            description: String::new(),
            pattern: "a".into(),
            replace: "b".into(),
            tests: vec![],
        };
        assert!(rule.validate().is_err());
    }
}
