//! Timers have no Appium counterpart; they become timestamp scripts

use super::BuiltinRule;

pub(super) const TIMERS: &[BuiltinRule] = &[
    BuiltinRule {
        name: "timer_start",
        description: "mobile:timer:start becomes a commented window timestamp script",
        pattern: r#"driver\.executeScript\("mobile:timer:start",\s*\{\s*"timerId":\s*"([^"]+)"\s*\}\)"#,
        template: "// Timer operations are not directly supported in Appium\n// Use JavaScript custom implementation instead\ndriver.executeScript(\"window.perfecto_timer_$1 = new Date().getTime();\")",
    },
    BuiltinRule {
        name: "timer_stop",
        description: "mobile:timer:stop becomes a commented window timestamp script",
        pattern: r#"driver\.executeScript\("mobile:timer:stop",\s*\{\s*"timerId":\s*"([^"]+)"\s*\}\)"#,
        template: "// Timer operations are not directly supported in Appium\n// Use JavaScript custom implementation instead\ndriver.executeScript(\"window.perfecto_timer_$1_end = new Date().getTime();\")",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::apply_group;

    #[test]
    fn test_timer_stop_suffix_follows_group() {
        let out = apply_group(
            TIMERS,
            r#"driver.executeScript("mobile:timer:stop", {"timerId": "login"})"#,
        );
        assert!(out.ends_with(
            "driver.executeScript(\"window.perfecto_timer_login_end = new Date().getTime();\")"
        ));
        assert!(out.starts_with("// Timer operations are not directly supported in Appium\n"));
    }

    #[test]
    fn test_timer_start() {
        let out = apply_group(
            TIMERS,
            r#"driver.executeScript("mobile:timer:start", {"timerId": "login"})"#,
        );
        assert!(out.contains("window.perfecto_timer_login = new Date().getTime();"));
    }
}
