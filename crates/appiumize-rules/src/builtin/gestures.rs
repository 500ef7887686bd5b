//! Swipe, scroll, touch and pinch gestures

use super::BuiltinRule;

pub(super) const SWIPE: &[BuiltinRule] = &[
    BuiltinRule {
        name: "swipe_coordinates",
        description: "mobile:touch:swipe between two points becomes a TouchAction press/moveTo/release",
        pattern: r#"driver\.executeScript\("mobile:touch:swipe",\s*\{\s*"start":\s*\{\s*"x":\s*(\d+),\s*"y":\s*(\d+)\s*\},\s*"end":\s*\{\s*"x":\s*(\d+),\s*"y":\s*(\d+)\s*\}\s*\}\)"#,
        template: "new TouchAction(driver)\n  .press({x: $1, y: $2})\n  .moveTo({x: $3, y: $4})\n  .release()\n  .perform()",
    },
    BuiltinRule {
        name: "swipe_direction",
        description: "mobile:swipe by direction becomes the Appium mobile: swipe command",
        pattern: r#"driver\.executeScript\("mobile:swipe",\s*\{\s*"direction":\s*"([^"]+)"\s*\}\)"#,
        template: r#"driver.executeScript("mobile: swipe", {"direction": "$1"})"#,
    },
];

pub(super) const SCROLL: &[BuiltinRule] = &[BuiltinRule {
    name: "scroll_direction",
    description: "mobile:scroll by direction becomes the Appium mobile: scroll command",
    pattern: r#"driver\.executeScript\("mobile:scroll",\s*\{\s*"direction":\s*"([^"]+)"\s*\}\)"#,
    template: r#"driver.executeScript("mobile: scroll", {"direction": "$1"})"#,
}];

pub(super) const TOUCH: &[BuiltinRule] = &[
    BuiltinRule {
        name: "tap",
        description: "mobile:touch:tap becomes a TouchAction tap",
        pattern: r#"driver\.executeScript\("mobile:touch:tap",\s*\{\s*"x":\s*(\d+),\s*"y":\s*(\d+)\s*\}\)"#,
        template: "new TouchAction(driver)\n  .tap({x: $1, y: $2})\n  .perform()",
    },
    BuiltinRule {
        name: "long_press",
        description: "mobile:touch:longPress becomes a TouchAction longPress",
        pattern: r#"driver\.executeScript\("mobile:touch:longPress",\s*\{\s*"x":\s*(\d+),\s*"y":\s*(\d+),\s*"duration":\s*(\d+)\s*\}\)"#,
        template: "new TouchAction(driver)\n  .longPress({x: $1, y: $2, duration: $3})\n  .release()\n  .perform()",
    },
    BuiltinRule {
        name: "double_tap",
        description: "mobile:touch:doubleTap becomes two TouchAction taps",
        pattern: r#"driver\.executeScript\("mobile:touch:doubleTap",\s*\{\s*"x":\s*(\d+),\s*"y":\s*(\d+)\s*\}\)"#,
        template: "new TouchAction(driver)\n  .tap({x: $1, y: $2})\n  .wait(100)\n  .tap({x: $1, y: $2})\n  .perform()",
    },
];

pub(super) const PINCH: &[BuiltinRule] = &[BuiltinRule {
    name: "pinch",
    description: "mobile:pinch becomes the Appium mobile: pinch command",
    pattern: r#"driver\.executeScript\("mobile:pinch",\s*\{\s*"scale":\s*([^,]+),\s*"velocity":\s*([^}]+)\s*\}\)"#,
    template: r#"driver.executeScript("mobile: pinch", {"scale": $1, "velocity": $2})"#,
}];
