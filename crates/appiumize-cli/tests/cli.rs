//! Runs the `appiumize` binary end to end

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn appiumize(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_appiumize"))
        .current_dir(dir)
        .arg("--no-config")
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_file_command_default_output() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("Login.java"),
        r#"driver.findElement(PerfectoMobileBy.id("submitBtn")).click();"#,
    )
    .unwrap();

    let out = appiumize(dir.path(), &["file", "Login.java"]);

    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        fs::read_to_string(dir.path().join("converted_Login.java")).unwrap(),
        r#"driver.findElement(By.id("submitBtn")).click();"#
    );
}

#[test]
fn test_file_command_missing_input_fails() {
    let dir = TempDir::new().unwrap();

    let out = appiumize(dir.path(), &["file", "Missing.java", "out.java"]);

    assert_eq!(out.status.code(), Some(1));
    assert!(!dir.path().join("out.java").exists());
}

#[test]
fn test_folder_command_json_report() {
    let dir = TempDir::new().unwrap();
    let suite = dir.path().join("suite");
    fs::create_dir(&suite).unwrap();
    fs::write(
        suite.join("Test.java"),
        r#"driver.executeScript("mobile:screen:image");"#,
    )
    .unwrap();
    fs::write(suite.join("logo.png"), [1u8, 2, 3]).unwrap();

    let out = appiumize(dir.path(), &["--json", "folder", "suite"]);

    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["summary"]["files_processed"], 2);
    assert_eq!(json["summary"]["files_converted"], 1);
    assert_eq!(
        fs::read_to_string(dir.path().join("converted_suite").join("Test.java")).unwrap(),
        "driver.getScreenshotAs(OutputType.FILE);"
    );
}

#[test]
fn test_folder_command_backup() {
    let dir = TempDir::new().unwrap();
    let suite = dir.path().join("suite");
    fs::create_dir(&suite).unwrap();
    fs::write(suite.join("Test.java"), "x").unwrap();
    let stale = dir.path().join("converted_suite");
    fs::create_dir(&stale).unwrap();
    fs::write(stale.join("Old.java"), "previous").unwrap();

    let out = appiumize(dir.path(), &["folder", "suite", "--backup"]);

    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert!(!stale.join("Old.java").exists());
    let sessions: Vec<_> = fs::read_dir(dir.path().join(".appiumize-backup"))
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(sessions.len(), 1);
    assert_eq!(
        fs::read_to_string(sessions[0].join("converted_suite").join("Old.java")).unwrap(),
        "previous"
    );
}

#[test]
fn test_extra_rules_and_verify() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("rules.yaml"),
        r#"
- name: tap_by_accessibility
  description: Accessibility id tap
  pattern: 'tapByA11y\("([^"]+)"\)'
  replace: 'driver.findElement(AppiumBy.accessibilityId("$1")).click()'
  tests:
    - input: 'tapByA11y("ok")'
      output: 'driver.findElement(AppiumBy.accessibilityId("ok")).click()'
"#,
    )
    .unwrap();
    fs::write(dir.path().join("A.java"), r#"tapByA11y("menu");"#).unwrap();

    let verify = appiumize(dir.path(), &["verify-rules", "rules.yaml"]);
    assert!(verify.status.success(), "{}", String::from_utf8_lossy(&verify.stdout));

    let out = appiumize(dir.path(), &["--rules", "rules.yaml", "file", "A.java", "B.java"]);
    assert!(out.status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("B.java")).unwrap(),
        r#"driver.findElement(AppiumBy.accessibilityId("menu")).click();"#
    );

    let rules = appiumize(dir.path(), &["--rules", "rules.yaml", "--json", "rules"]);
    let list: serde_json::Value = serde_json::from_slice(&rules.stdout).unwrap();
    let names: Vec<_> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names.first().map(String::as_str), Some("init_driver"));
    assert_eq!(names.last().map(String::as_str), Some("tap_by_accessibility"));
}

#[test]
fn test_verify_rules_reports_failure() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("bad.yaml"),
        "name: wrong\npattern: 'a'\nreplace: 'b'\ntests:\n  - input: 'a'\n    output: 'c'\n",
    )
    .unwrap();

    let out = appiumize(dir.path(), &["verify-rules", "bad.yaml"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_file_command_fallback_copy_succeeds() {
    let dir = TempDir::new().unwrap();
    let bytes = vec![b'a', 0xff, b'b'];
    fs::write(dir.path().join("notes.txt"), &bytes).unwrap();

    let out = appiumize(dir.path(), &["file", "notes.txt"]);

    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(fs::read(dir.path().join("converted_notes.txt")).unwrap(), bytes);
}

#[test]
fn test_rules_directory_loaded_in_name_order() {
    let dir = TempDir::new().unwrap();
    let rules = dir.path().join("rules");
    fs::create_dir(&rules).unwrap();
    fs::write(rules.join("b.yaml"), "name: second\npattern: 'two'\nreplace: 'three'\n").unwrap();
    fs::write(rules.join("a.yaml"), "name: first\npattern: 'one'\nreplace: 'two'\n").unwrap();
    fs::write(dir.path().join("A.java"), "one").unwrap();

    let out = appiumize(dir.path(), &["--rules", "rules", "file", "A.java", "B.java"]);

    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(fs::read_to_string(dir.path().join("B.java")).unwrap(), "three");
}

#[cfg(unix)]
#[test]
fn test_folder_command_write_failure_exits_one() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let suite = dir.path().join("suite");
    fs::create_dir(&suite).unwrap();
    fs::write(suite.join("Test.java"), "x").unwrap();
    let output = dir.path().join("converted_suite");
    fs::create_dir(&output).unwrap();
    fs::set_permissions(&output, fs::Permissions::from_mode(0o555)).unwrap();

    // Privileged users can write there anyway
    if fs::write(output.join(".writable"), "").is_ok() {
        fs::set_permissions(&output, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let out = appiumize(dir.path(), &["--json", "folder", "suite"]);
    fs::set_permissions(&output, fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(out.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["summary"]["errors"], 1);
    assert_eq!(json["files"][0]["status"], "failed");
}
