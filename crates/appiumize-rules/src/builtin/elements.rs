//! Element locators: clicks, typing, visibility checks and value reads

use super::BuiltinRule;

pub(super) const CLICK: &[BuiltinRule] = &[
    BuiltinRule {
        name: "click_by_text",
        description: "Click located by PerfectoMobileBy.text becomes a By.xpath text match",
        pattern: r#"driver\.findElement\(PerfectoMobileBy\.text\("([^"]+)"\)\)\.click\(\)"#,
        template: r#"driver.findElement(By.xpath("//*[@text='$1']")).click()"#,
    },
    BuiltinRule {
        name: "click_by_name",
        description: "Click located by PerfectoMobileBy.name becomes By.name",
        pattern: r#"driver\.findElement\(PerfectoMobileBy\.name\("([^"]+)"\)\)\.click\(\)"#,
        template: r#"driver.findElement(By.name("$1")).click()"#,
    },
    BuiltinRule {
        name: "click_by_id",
        description: "Click located by PerfectoMobileBy.id becomes By.id",
        pattern: r#"driver\.findElement\(PerfectoMobileBy\.id\("([^"]+)"\)\)\.click\(\)"#,
        template: r#"driver.findElement(By.id("$1")).click()"#,
    },
    BuiltinRule {
        name: "click_by_xpath",
        description: "Click located by PerfectoMobileBy.xpath becomes By.xpath",
        pattern: r#"driver\.findElement\(PerfectoMobileBy\.xpath\("([^"]+)"\)\)\.click\(\)"#,
        template: r#"driver.findElement(By.xpath("$1")).click()"#,
    },
];

pub(super) const SEND_KEYS: &[BuiltinRule] = &[
    BuiltinRule {
        name: "send_keys_by_name",
        description: "sendKeys on a PerfectoMobileBy.name element becomes By.name",
        pattern: r#"driver\.findElement\(PerfectoMobileBy\.name\("([^"]+)"\)\)\.sendKeys\("([^"]+)"\)"#,
        template: r#"driver.findElement(By.name("$1")).sendKeys("$2")"#,
    },
    BuiltinRule {
        name: "send_keys_by_id",
        description: "sendKeys on a PerfectoMobileBy.id element becomes By.id",
        pattern: r#"driver\.findElement\(PerfectoMobileBy\.id\("([^"]+)"\)\)\.sendKeys\("([^"]+)"\)"#,
        template: r#"driver.findElement(By.id("$1")).sendKeys("$2")"#,
    },
    BuiltinRule {
        name: "send_keys_by_xpath",
        description: "sendKeys on a PerfectoMobileBy.xpath element becomes By.xpath",
        pattern: r#"driver\.findElement\(PerfectoMobileBy\.xpath\("([^"]+)"\)\)\.sendKeys\("([^"]+)"\)"#,
        template: r#"driver.findElement(By.xpath("$1")).sendKeys("$2")"#,
    },
];

pub(super) const VERIFICATION: &[BuiltinRule] = &[
    BuiltinRule {
        name: "is_displayed_by_id",
        description: "isDisplayed on a PerfectoMobileBy.id element becomes By.id",
        pattern: r#"driver\.findElement\(PerfectoMobileBy\.id\("([^"]+)"\)\)\.isDisplayed\(\)"#,
        template: r#"driver.findElement(By.id("$1")).isDisplayed()"#,
    },
    BuiltinRule {
        name: "is_displayed_by_name",
        description: "isDisplayed on a PerfectoMobileBy.name element becomes By.name",
        pattern: r#"driver\.findElement\(PerfectoMobileBy\.name\("([^"]+)"\)\)\.isDisplayed\(\)"#,
        template: r#"driver.findElement(By.name("$1")).isDisplayed()"#,
    },
    BuiltinRule {
        name: "is_displayed_by_xpath",
        description: "isDisplayed on a PerfectoMobileBy.xpath element becomes By.xpath",
        pattern: r#"driver\.findElement\(PerfectoMobileBy\.xpath\("([^"]+)"\)\)\.isDisplayed\(\)"#,
        template: r#"driver.findElement(By.xpath("$1")).isDisplayed()"#,
    },
];

pub(super) const VALUE: &[BuiltinRule] = &[
    BuiltinRule {
        name: "get_value_by_text",
        description: "getValue on a PerfectoMobileBy.text element becomes getText on a By.xpath match",
        pattern: r#"driver\.findElement\(PerfectoMobileBy\.text\("([^"]+)"\)\)\.getValue\(\)"#,
        template: r#"driver.findElement(By.xpath("//*[@text='$1']")).getText()"#,
    },
    BuiltinRule {
        name: "get_value_by_id",
        description: "getValue on a PerfectoMobileBy.id element becomes getText on By.id",
        pattern: r#"driver\.findElement\(PerfectoMobileBy\.id\("([^"]+)"\)\)\.getValue\(\)"#,
        template: r#"driver.findElement(By.id("$1")).getText()"#,
    },
];
