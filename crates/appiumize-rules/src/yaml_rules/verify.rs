//! Compiled YAML rules and their inline tests

use appiumize_core::{InvalidRuleError, RuleDefinition};

use super::schema::{TestCase, YamlRule};

/// A YAML rule together with its compiled definition
#[derive(Debug, Clone)]
pub struct CompiledRule {
    rule: YamlRule,
    definition: RuleDefinition,
}

/// Outcome of one inline test case
#[derive(Debug, Clone)]
pub struct TestResult {
    pub input: String,
    pub expected: Option<String>,
    pub actual: String,
    pub passed: bool,
    pub error: Option<String>,
}

impl CompiledRule {
    pub fn new(rule: YamlRule) -> Result<Self, InvalidRuleError> {
        let definition = rule.compile()?;
        Ok(Self { rule, definition })
    }

    pub fn rule(&self) -> &YamlRule {
        &self.rule
    }

    pub fn definition(&self) -> &RuleDefinition {
        &self.definition
    }

    pub fn into_definition(self) -> RuleDefinition {
        self.definition
    }

    /// Run every non-skipped test case against this rule alone
    pub fn run_tests(&self) -> Vec<TestResult> {
        self.rule
            .tests
            .iter()
            .filter(|t| !t.skip)
            .map(|test| self.run_single_test(test))
            .collect()
    }

    fn run_single_test(&self, test: &TestCase) -> TestResult {
        let actual = match self.definition.apply(&test.input) {
            Ok(applied) => applied.text.into_owned(),
            Err(e) => {
                return TestResult {
                    input: test.input.clone(),
                    expected: test.output.clone(),
                    actual: test.input.clone(),
                    passed: false,
                    error: Some(e.to_string()),
                }
            }
        };

        // No expected output means the rule should not match
        let (passed, error) = match &test.output {
            Some(expected) if &actual == expected => (true, None),
            Some(_) => (false, Some("Output mismatch".to_string())),
            None if actual == test.input => (true, None),
            None => (false, Some("Expected no change but rule matched".to_string())),
        };

        TestResult {
            input: test.input.clone(),
            expected: test.output.clone(),
            actual,
            passed,
            error,
        }
    }
}
