//! Built-in Perfecto to Appium rules
//!
//! Rules are grouped by concern but registered in one fixed order, which is
//! the order listed in `definitions()`.

mod apps;
mod device;
mod driver;
mod elements;
mod gestures;
mod imports;
mod timers;
mod visual;
mod waits;

use appiumize_core::RuleDefinition;

/// A rule as written in the built-in table, before compilation
#[derive(Debug, Clone, Copy)]
pub struct BuiltinRule {
    pub name: &'static str,
    pub description: &'static str,
    pub pattern: &'static str,
    pub template: &'static str,
}

impl BuiltinRule {
    pub fn compile(&self) -> Result<RuleDefinition, appiumize_core::InvalidRuleError> {
        RuleDefinition::new(self.name, self.description, self.pattern, self.template)
    }
}

/// All built-in rules in application order
pub fn definitions() -> impl Iterator<Item = &'static BuiltinRule> {
    let groups: [&'static [BuiltinRule]; 22] = [
        driver::INIT,
        elements::CLICK,
        elements::SEND_KEYS,
        waits::WAITS,
        gestures::SWIPE,
        gestures::SCROLL,
        gestures::TOUCH,
        gestures::PINCH,
        apps::APPLICATION,
        device::HANDSET,
        device::LOCATION,
        device::BROWSER,
        device::SCREENSHOT,
        visual::VISUAL,
        device::BIOMETRICS,
        device::NETWORK,
        device::FILES,
        timers::TIMERS,
        device::NOTIFICATIONS,
        elements::VERIFICATION,
        elements::VALUE,
        imports::IMPORTS,
    ];
    groups.into_iter().flatten()
}

/// Compile every built-in rule
///
/// The table is static and covered by tests, so a failure here is a bug in
/// the table itself.
pub(crate) fn compile() -> Vec<RuleDefinition> {
    definitions()
        .map(|rule| {
            rule.compile()
                .unwrap_or_else(|e| panic!("built-in rule `{}` is invalid: {}", rule.name, e))
        })
        .collect()
}

/// Run one group of rules over `text`, in table order
#[cfg(test)]
pub(crate) fn apply_group(group: &[BuiltinRule], text: &str) -> String {
    let mut current = text.to_string();
    for rule in group {
        let compiled = rule.compile().unwrap();
        current = compiled.apply(&current).unwrap().text.into_owned();
    }
    current
}
