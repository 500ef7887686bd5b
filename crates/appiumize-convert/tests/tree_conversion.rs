//! End-to-end tests for tree conversion

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use appiumize_convert::{ConvertError, Converter, CopyReason, ExcludeSet, FileOutcome, WalkOptions};
use appiumize_rules::RuleRegistry;
use tempfile::TempDir;
use walkdir::WalkDir;

const LOGIN_TEST: &str = r#"import com.perfectomobile.selenium.MobileDriver;

public class LoginTest {
    public void run() {
        driver.findElement(PerfectoMobileBy.id("submitBtn")).click();
        driver.executeScript("mobile:application:open", {"name": "Bank"});
    }
}
"#;

/// Build a small project tree and return its root
fn create_project(dir: &Path) -> PathBuf {
    let root = dir.join("suite");
    fs::create_dir_all(root.join("src").join("pages")).unwrap();
    fs::create_dir_all(root.join("assets")).unwrap();
    fs::create_dir_all(root.join("empty")).unwrap();

    fs::write(root.join("src").join("LoginTest.java"), LOGIN_TEST).unwrap();
    fs::write(
        root.join("src").join("pages").join("home.js"),
        r#"driver.findElement(PerfectoMobileBy.xpath("//button")).click();"#,
    )
    .unwrap();
    fs::write(root.join("assets").join("logo.png"), [0x89, b'P', b'N', b'G', 0x00, 0xff]).unwrap();
    fs::write(root.join("README"), "PerfectoMobileBy.id(\"x\") stays").unwrap();
    root
}

fn relative_paths(root: &Path) -> BTreeSet<PathBuf> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|e| e.unwrap().path().strip_prefix(root).unwrap().to_path_buf())
        .collect()
}

#[test]
fn test_structure_preserved() {
    let dir = TempDir::new().unwrap();
    let root = create_project(dir.path());

    let result = Converter::with_builtin_rules().convert_tree(&root).unwrap();

    assert_eq!(result.output_root, dir.path().join("converted_suite"));
    assert_eq!(relative_paths(&root), relative_paths(&result.output_root));
    assert!(result.output_root.join("empty").is_dir());
    assert_eq!(result.report.file_count(), 4);
    assert_eq!(result.report.folders, 4);
}

#[test]
fn test_java_file_converted_end_to_end() {
    let dir = TempDir::new().unwrap();
    let root = create_project(dir.path());

    let result = Converter::with_builtin_rules().convert_tree(&root).unwrap();
    let converted =
        fs::read_to_string(result.output_root.join("src").join("LoginTest.java")).unwrap();

    assert!(converted.contains(r#"driver.findElement(By.id("submitBtn")).click();"#));
    assert!(converted.contains(r#"driver.activateApp("Bank");"#));
    assert!(converted.contains("import io.appium.java_client.AppiumDriver;"));
    assert!(!converted.contains("PerfectoMobileBy"));
}

#[test]
fn test_opaque_files_copied_byte_for_byte() {
    let dir = TempDir::new().unwrap();
    let root = create_project(dir.path());

    let result = Converter::with_builtin_rules().convert_tree(&root).unwrap();

    for rel in ["assets/logo.png", "README"] {
        assert_eq!(
            fs::read(root.join(rel)).unwrap(),
            fs::read(result.output_root.join(rel)).unwrap(),
            "{} changed",
            rel
        );
    }

    let readme = result
        .report
        .files
        .iter()
        .find(|f| f.path == Path::new("README"))
        .unwrap();
    assert_eq!(readme.outcome, FileOutcome::copied(CopyReason::Opaque));
}

#[test]
fn test_invalid_utf8_text_file_falls_back_to_copy() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("suite");
    fs::create_dir(&root).unwrap();
    let bytes = vec![b'P', b'e', b'r', 0xc3, 0x28, 0xff, b'\n'];
    fs::write(root.join("notes.txt"), &bytes).unwrap();
    fs::write(root.join("Other.java"), LOGIN_TEST).unwrap();

    let result = Converter::with_builtin_rules().convert_tree(&root).unwrap();

    assert_eq!(fs::read(result.output_root.join("notes.txt")).unwrap(), bytes);
    assert_eq!(result.report.fallback_count(), 1);
    assert_eq!(result.report.converted_count(), 1);
    assert!(!result.report.has_failures());
}

#[test]
fn test_missing_root_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("absent");

    let err = Converter::with_builtin_rules().convert_tree(&root).unwrap_err();

    assert!(matches!(err, ConvertError::InputNotFound(_)));
    assert!(!dir.path().join("converted_absent").exists());
}

#[test]
fn test_file_root_fails() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("Login.java");
    fs::write(&file, LOGIN_TEST).unwrap();

    let err = Converter::with_builtin_rules().convert_tree(&file).unwrap_err();

    assert!(matches!(err, ConvertError::NotADirectory(_)));
    assert!(!dir.path().join("converted_Login.java").exists());
}

#[test]
fn test_existing_output_is_cleared() {
    let dir = TempDir::new().unwrap();
    let root = create_project(dir.path());
    let stale = dir.path().join("converted_suite").join("old");
    fs::create_dir_all(&stale).unwrap();
    fs::write(stale.join("Stale.java"), "stale").unwrap();

    let result = Converter::with_builtin_rules().convert_tree(&root).unwrap();

    assert!(!result.output_root.join("old").exists());
    assert_eq!(relative_paths(&root), relative_paths(&result.output_root));
}

#[test]
fn test_excluded_files_copied_unchanged() {
    let dir = TempDir::new().unwrap();
    let root = create_project(dir.path());

    let options = WalkOptions {
        parallel: false,
        exclude: ExcludeSet::new(["pages/"]),
    };
    let result = Converter::with_builtin_rules()
        .with_options(options)
        .convert_tree(&root)
        .unwrap();

    let rel = Path::new("src").join("pages").join("home.js");
    assert_eq!(
        fs::read(root.join(&rel)).unwrap(),
        fs::read(result.output_root.join(&rel)).unwrap()
    );
    let record = result.report.files.iter().find(|f| f.path == rel).unwrap();
    assert_eq!(record.outcome, FileOutcome::copied(CopyReason::Excluded));
}

#[test]
fn test_parallel_matches_sequential() {
    let dir = TempDir::new().unwrap();
    let root = create_project(dir.path());
    for i in 0..20 {
        fs::write(
            root.join("src").join(format!("Case{:02}.java", i)),
            format!(r#"driver.findElement(PerfectoMobileBy.id("field{}")).sendKeys("v");"#, i),
        )
        .unwrap();
    }

    let sequential = Converter::with_builtin_rules();
    let seq_out = dir.path().join("seq");
    let seq_report = sequential.convert_tree_into(&root, &seq_out).unwrap();

    let parallel = Converter::with_builtin_rules().with_options(WalkOptions {
        parallel: true,
        ..WalkOptions::default()
    });
    let par_out = dir.path().join("par");
    let par_report = parallel.convert_tree_into(&root, &par_out).unwrap();

    let seq_paths: Vec<_> = seq_report.files.iter().map(|f| f.path.clone()).collect();
    let par_paths: Vec<_> = par_report.files.iter().map(|f| f.path.clone()).collect();
    assert_eq!(seq_paths, par_paths);

    for rel in relative_paths(&seq_out) {
        let seq = seq_out.join(&rel);
        if seq.is_file() {
            assert_eq!(fs::read(&seq).unwrap(), fs::read(par_out.join(&rel)).unwrap());
        }
    }
}

#[test]
fn test_custom_rule_runs_after_builtins() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("suite");
    fs::create_dir(&root).unwrap();
    fs::write(
        root.join("Swap.java"),
        r#"driver.findElement(PerfectoMobileBy.id("a")).click();"#,
    )
    .unwrap();

    let converter = Converter::new(Arc::new(RuleRegistry::builtin()));
    converter.add_rule(r#"By\.id\("(\w+)"\)"#, r#"AppiumBy.id("$1")"#).unwrap();

    let result = converter.convert_tree(&root).unwrap();

    assert_eq!(
        fs::read_to_string(result.output_root.join("Swap.java")).unwrap(),
        r#"driver.findElement(AppiumBy.id("a")).click();"#
    );
}
