//! Explicit waits

use super::BuiltinRule;

pub(super) const WAITS: &[BuiltinRule] = &[
    BuiltinRule {
        name: "wait_text_present",
        description: "PerfectoMobileConditions.textPresent wait becomes until.elementLocated on a text xpath",
        pattern: r#"driver\.wait\(PerfectoMobileConditions\.textPresent\("([^"]+)"\),\s*(\d+)\)"#,
        template: r#"driver.wait(until.elementLocated(By.xpath("//*[contains(@text,'$1')]")), $2)"#,
    },
    BuiltinRule {
        name: "wait_element_displayed",
        description: "PerfectoMobileConditions.elementDisplayed wait becomes until.elementIsVisible",
        pattern: r#"driver\.wait\(PerfectoMobileConditions\.elementDisplayed\(([^)]+)\),\s*(\d+)\)"#,
        template: "driver.wait(until.elementIsVisible($1), $2)",
    },
    BuiltinRule {
        name: "wait_element_enabled",
        description: "PerfectoMobileConditions.elementEnabled wait becomes until.elementIsEnabled",
        pattern: r#"driver\.wait\(PerfectoMobileConditions\.elementEnabled\(([^)]+)\),\s*(\d+)\)"#,
        template: "driver.wait(until.elementIsEnabled($1), $2)",
    },
];
