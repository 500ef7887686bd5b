//! Visual (image and text) lookups

use super::BuiltinRule;

pub(super) const VISUAL: &[BuiltinRule] = &[
    BuiltinRule {
        name: "find_image",
        description: "mobile:image:find becomes driver.findElement(By.image(...))",
        pattern: r#"driver\.executeScript\("mobile:image:find",\s*\{\s*"content":\s*"([^"]+)"\s*\}\)"#,
        template: r#"driver.findElement(By.image("$1"))"#,
    },
    BuiltinRule {
        name: "click_image",
        description: "mobile:image:click becomes a click on By.image",
        pattern: r#"driver\.executeScript\("mobile:image:click",\s*\{\s*"content":\s*"([^"]+)"\s*\}\)"#,
        template: r#"driver.findElement(By.image("$1")).click()"#,
    },
    BuiltinRule {
        name: "find_text",
        description: "mobile:text:find becomes a By.xpath contains(@text) lookup",
        pattern: r#"driver\.executeScript\("mobile:text:find",\s*\{\s*"content":\s*"([^"]+)"\s*\}\)"#,
        template: r#"driver.findElement(By.xpath("//*[contains(@text,'$1')]"))"#,
    },
];
