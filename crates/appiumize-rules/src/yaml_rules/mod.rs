//! User-defined rules in YAML
//!
//! A rule file holds one rule or a list of rules. Each rule carries a regex
//! pattern, a replacement template and optional inline test cases:
//!
//! ```yaml
//! name: tap_by_accessibility
//! description: Accessibility id tap
//! pattern: 'tapByA11y\("([^"]+)"\)'
//! replace: 'driver.findElement(AppiumBy.accessibilityId("$1")).click()'
//!
//! tests:
//!   - input: 'tapByA11y("ok")'
//!     output: 'driver.findElement(AppiumBy.accessibilityId("ok")).click()'
//!   - input: 'tap("ok")'
//! ```
//!
//! A test case without `output` asserts that the rule leaves the input alone.

pub mod loader;
pub mod schema;
pub mod verify;

pub use loader::{load_rules_from_dir, load_rules_from_file, load_rules_from_string, LoadError};
pub use schema::{TestCase, YamlRule};
pub use verify::{CompiledRule, TestResult};
