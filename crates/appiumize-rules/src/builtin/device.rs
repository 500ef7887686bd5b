//! Device management: handset, location, browser, screenshots, biometrics,
//! network, file transfer and notifications

use super::BuiltinRule;

pub(super) const HANDSET: &[BuiltinRule] = &[
    BuiltinRule {
        name: "unlock_device",
        description: "mobile:handset:ready becomes driver.unlockDevice",
        pattern: r#"driver\.executeScript\("mobile:handset:ready"\)"#,
        template: "driver.unlockDevice()",
    },
    BuiltinRule {
        name: "press_key",
        description: "mobile:pressKey becomes driver.pressKey with a KeyEvent",
        pattern: r#"driver\.executeScript\("mobile:pressKey",\s*\{\s*"key":\s*"([^"]+)"\s*\}\)"#,
        template: "driver.pressKey(new KeyEvent($1))",
    },
    BuiltinRule {
        name: "lock_device",
        description: "mobile:handset:lock becomes driver.lockDevice",
        pattern: r#"driver\.executeScript\("mobile:handset:lock",\s*\{\s*"seconds":\s*(\d+)\s*\}\)"#,
        template: "driver.lockDevice(Duration.ofSeconds($1))",
    },
    BuiltinRule {
        name: "reboot_device",
        description: "mobile:handset:reboot becomes a mobile: shell reboot",
        pattern: r#"driver\.executeScript\("mobile:handset:reboot"\)"#,
        template: r#"driver.executeScript("mobile: shell", {"command": "reboot"})"#,
    },
];

pub(super) const LOCATION: &[BuiltinRule] = &[BuiltinRule {
    name: "set_location",
    description: "mobile:location:set becomes driver.setLocation",
    pattern: r#"driver\.executeScript\("mobile:location:set",\s*\{\s*"latitude":\s*([^,]+),\s*"longitude":\s*([^,]+),\s*"altitude":\s*([^}]+)\s*\}\)"#,
    template: "driver.setLocation(new Location($1, $2, $3))",
}];

pub(super) const BROWSER: &[BuiltinRule] = &[BuiltinRule {
    name: "open_url",
    description: "mobile:browser:open becomes driver.get",
    pattern: r#"driver\.executeScript\("mobile:browser:open",\s*\{\s*"url":\s*"([^"]+)"\s*\}\)"#,
    template: r#"driver.get("$1")"#,
}];

pub(super) const SCREENSHOT: &[BuiltinRule] = &[BuiltinRule {
    name: "screenshot",
    description: "mobile:screen:image becomes driver.getScreenshotAs",
    pattern: r#"driver\.executeScript\("mobile:screen:image"\)"#,
    template: "driver.getScreenshotAs(OutputType.FILE)",
}];

pub(super) const BIOMETRICS: &[BuiltinRule] = &[BuiltinRule {
    name: "fingerprint",
    description: "mobile:fingerprint becomes the Appium mobile: performBiometric command",
    pattern: r#"driver\.executeScript\("mobile:fingerprint",\s*\{\s*"operation":\s*"([^"]+)"\s*\}\)"#,
    template: r#"driver.executeScript("mobile: performBiometric", {"type": "$1"})"#,
}];

pub(super) const NETWORK: &[BuiltinRule] = &[BuiltinRule {
    name: "toggle_wifi",
    description: "mobile:network:settings wifi becomes driver.toggleWifi",
    pattern: r#"driver\.executeScript\("mobile:network:settings",\s*\{\s*"wifi":\s*"([^"]+)"\s*\}\)"#,
    template: "driver.toggleWifi()",
}];

pub(super) const FILES: &[BuiltinRule] = &[
    BuiltinRule {
        name: "pull_file",
        description: "mobile:file:download becomes driver.pullFile on the device path",
        pattern: r#"driver\.executeScript\("mobile:file:download",\s*\{\s*"source":\s*"([^"]+)",\s*"target":\s*"([^"]+)"\s*\}\)"#,
        template: r#"driver.pullFile("$1")"#,
    },
    BuiltinRule {
        name: "push_file",
        description: "mobile:file:upload becomes driver.pushFile(target, source)",
        pattern: r#"driver\.executeScript\("mobile:file:upload",\s*\{\s*"source":\s*"([^"]+)",\s*"target":\s*"([^"]+)"\s*\}\)"#,
        template: r#"driver.pushFile("$2", "$1")"#,
    },
];

pub(super) const NOTIFICATIONS: &[BuiltinRule] = &[BuiltinRule {
    name: "open_notifications",
    description: "mobile:notifications:open becomes driver.openNotifications",
    pattern: r#"driver\.executeScript\("mobile:notifications:open"\)"#,
    template: "driver.openNotifications()",
}];
