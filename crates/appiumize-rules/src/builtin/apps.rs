//! Application lifecycle

use super::BuiltinRule;

pub(super) const APPLICATION: &[BuiltinRule] = &[
    BuiltinRule {
        name: "open_app",
        description: "mobile:application:open becomes driver.activateApp",
        pattern: r#"driver\.executeScript\("mobile:application:open",\s*\{\s*"name":\s*"([^"]+)"\s*\}\)"#,
        template: r#"driver.activateApp("$1")"#,
    },
    BuiltinRule {
        name: "close_app",
        description: "mobile:application:close becomes driver.terminateApp",
        pattern: r#"driver\.executeScript\("mobile:application:close",\s*\{\s*"name":\s*"([^"]+)"\s*\}\)"#,
        template: r#"driver.terminateApp("$1")"#,
    },
    BuiltinRule {
        name: "install_app",
        description: "mobile:application:install becomes driver.installApp",
        pattern: r#"driver\.executeScript\("mobile:application:install",\s*\{\s*"file":\s*"([^"]+)"\s*\}\)"#,
        template: r#"driver.installApp("$1")"#,
    },
    BuiltinRule {
        name: "uninstall_app",
        description: "mobile:application:uninstall becomes driver.removeApp",
        pattern: r#"driver\.executeScript\("mobile:application:uninstall",\s*\{\s*"name":\s*"([^"]+)"\s*\}\)"#,
        template: r#"driver.removeApp("$1")"#,
    },
    BuiltinRule {
        name: "reset_app",
        description: "mobile:application:reset becomes driver.resetApp (the app name is dropped)",
        pattern: r#"driver\.executeScript\("mobile:application:reset",\s*\{\s*"name":\s*"([^"]+)"\s*\}\)"#,
        template: "driver.resetApp()",
    },
    BuiltinRule {
        name: "background_app",
        description: "mobile:application:background becomes driver.runAppInBackground",
        pattern: r#"driver\.executeScript\("mobile:application:background",\s*\{\s*"seconds":\s*(\d+)\s*\}\)"#,
        template: "driver.runAppInBackground(Duration.ofSeconds($1))",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::apply_group;

    #[test]
    fn test_open_and_close_app() {
        let source = r#"driver.executeScript("mobile:application:open", {"name": "Maps"});
driver.executeScript("mobile:application:close", {"name": "Maps"});"#;
        assert_eq!(
            apply_group(APPLICATION, source),
            "driver.activateApp(\"Maps\");\ndriver.terminateApp(\"Maps\");"
        );
    }

    #[test]
    fn test_install_uses_file_argument() {
        assert_eq!(
            apply_group(
                APPLICATION,
                r#"driver.executeScript("mobile:application:install", {"file": "app.apk"})"#
            ),
            r#"driver.installApp("app.apk")"#
        );
    }

    #[test]
    fn test_reset_drops_name() {
        assert_eq!(
            apply_group(
                APPLICATION,
                r#"driver.executeScript("mobile:application:reset", {"name": "Maps"})"#
            ),
            "driver.resetApp()"
        );
    }

    #[test]
    fn test_background_seconds() {
        assert_eq!(
            apply_group(
                APPLICATION,
                r#"driver.executeScript("mobile:application:background", {"seconds": 5})"#
            ),
            "driver.runAppInBackground(Duration.ofSeconds(5))"
        );
    }
}
