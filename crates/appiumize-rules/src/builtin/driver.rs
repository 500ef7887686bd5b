//! Driver construction

use super::BuiltinRule;

pub(super) const INIT: &[BuiltinRule] = &[BuiltinRule {
    name: "init_driver",
    description: "Replace PerfectoMobileDriver(url, platform) with AppiumDriver and DesiredCapabilities",
    pattern: r#"PerfectoMobileDriver\s*\(\s*"([^"]+)"\s*,\s*"([^"]+)"\s*\)"#,
    template: "AppiumDriver(new URL(\"$1\"), new DesiredCapabilities({\n  platformName: \"$2\",\n  automationName: \"Appium\"\n}))",
}];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::apply_group;

    #[test]
    fn test_init_driver() {
        let out = apply_group(
            INIT,
            r#"driver = new PerfectoMobileDriver( "https://cloud.example/wd/hub", "Android" );"#,
        );
        assert_eq!(
            out,
            "driver = new AppiumDriver(new URL(\"https://cloud.example/wd/hub\"), new DesiredCapabilities({\n  platformName: \"Android\",\n  automationName: \"Appium\"\n}));"
        );
    }

    #[test]
    fn test_init_driver_requires_two_arguments() {
        let source = r#"new PerfectoMobileDriver("only-url")"#;
        assert_eq!(apply_group(INIT, source), source);
    }
}
