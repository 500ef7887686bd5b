//! Import replacement
//!
//! Every `import com.perfectomobile...;` line is replaced by the full Appium
//! import block, so a file with several Perfecto imports gets the block
//! once per import line.

use super::BuiltinRule;

pub(super) const IMPORTS: &[BuiltinRule] = &[BuiltinRule {
    name: "replace_imports",
    description: "Replace com.perfectomobile imports with the Appium and Selenium imports",
    pattern: r"import\s+com\.perfectomobile\..+;",
    template: "import io.appium.java_client.AppiumDriver;\n\
               import io.appium.java_client.TouchAction;\n\
               import io.appium.java_client.touch.WaitOptions;\n\
               import io.appium.java_client.touch.offset.PointOption;\n\
               import org.openqa.selenium.By;\n\
               import org.openqa.selenium.support.ui.WebDriverWait;\n\
               import org.openqa.selenium.support.ui.ExpectedConditions as until;\n\
               import org.openqa.selenium.remote.DesiredCapabilities;\n\
               import java.time.Duration;\n\
               import org.openqa.selenium.OutputType;",
}];
