// Tests for `properorder check` output and exit codes.

use properorder_enforce::rules::OrderRule;
use properorder_enforce::types::CheckReport;

use super::common;

#[test]
/// Exit code 0 and no stdout when every stream is well ordered.
fn test_check_clean_exits_zero() {
    let (_dir, root) = common::setup_project(&[]);
    common::copy_fixture("streams/clean.decls.json", &root);

    let out = common::run_in(&root, &["check"]);
    assert_eq!(out.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(out.stdout.is_empty());
}

#[test]
/// Exit code 1 and one block per violation when ordering is broken.
fn test_check_violations_exit_one() {
    let (_dir, root) = common::setup_project(&[]);
    common::copy_fixture("streams/properorder.decls.json", &root);

    let out = common::run_in(&root, &["check"]);
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.matches("warning[properorder]").count(), 8);
    assert!(stdout.contains(
        "warning[properorder]: the constructor must be positioned after the type is defined."
    ));
    assert!(stdout.contains("--> src/properorder.go:7:"));
    assert!(stdout.contains("8 warning(s) in 1 of 1 file(s)"));
}

#[test]
/// The reference stream trips every ordering rule exactly once.
fn test_check_reports_each_message_once() {
    let (_dir, root) = common::setup_project(&[]);
    common::copy_fixture("streams/properorder.decls.json", &root);

    let out = common::run_in(&root, &["check"]);
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);

    let rules = [
        OrderRule::ConstructorBeforeType,
        OrderRule::MethodUnderForeignType,
        OrderRule::ConstructorUnderForeignType,
        OrderRule::HelperInsideMethodBlock,
        OrderRule::HelperInsideConstructorBlock,
        OrderRule::MethodAboveConstructor,
        OrderRule::MethodAfterForeignMethod,
        OrderRule::MethodAfterForeignResult,
    ];
    for rule in rules {
        let line = format!("warning[properorder]: {}\n", rule.message());
        assert_eq!(stdout.matches(line.as_str()).count(), 1, "{}: {}", rule, stdout);
    }
}

#[test]
/// `--json` emits a parseable report.
fn test_check_json_report() {
    let (_dir, root) = common::setup_project(&[]);
    common::copy_fixture("streams/properorder.decls.json", &root);
    common::copy_fixture("streams/clean.decls.json", &root);

    let out = common::run_in(&root, &["check", "--json"]);
    assert_eq!(out.status.code(), Some(1));
    let report: CheckReport = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report.command, "check");
    assert_eq!(report.status, "warning");
    assert_eq!(report.checks, vec!["properorder"]);
    assert_eq!(report.files_analyzed.len(), 2);
    assert_eq!(report.diagnostics.len(), 8);
    assert!(report.diagnostics.iter().all(|d| d.position.file == "src/properorder.go"));
}

#[test]
/// Explicit paths limit what is checked.
fn test_check_explicit_path() {
    let (_dir, root) = common::setup_project(&[]);
    common::copy_fixture("streams/properorder.decls.json", &root);
    common::copy_fixture("streams/clean.decls.json", &root);

    let out = common::run_in(&root, &["check", "clean.decls.json"]);
    assert_eq!(out.status.code(), Some(0));
}

#[test]
/// A malformed stream document is an error, not a clean run.
fn test_check_malformed_stream_exits_two() {
    let (_dir, root) = common::setup_project(&[("broken.decls.json", "{ \"files\": [")]);

    let out = common::run_in(&root, &["check"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("broken.decls.json"));
}

#[test]
/// A missing path is an error.
fn test_check_missing_path_exits_two() {
    let (_dir, root) = common::setup_project(&[]);
    let out = common::run_in(&root, &["check", "nowhere.decls.json"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
/// The config can switch the check off.
fn test_check_disabled_by_config() {
    let (_dir, root) = common::setup_project(&[(
        ".properorder/properorder.json",
        r#"{ "checks": { "properorder": false } }"#,
    )]);
    common::copy_fixture("streams/properorder.decls.json", &root);

    let out = common::run_in(&root, &["check"]);
    assert_eq!(out.status.code(), Some(0));
}

#[test]
/// `--config` points at a config outside the project directory.
fn test_check_explicit_config() {
    let (_dir, root) = common::setup_project(&[(
        "alt/order.json",
        r#"{ "checks": { "properorder": false } }"#,
    )]);
    common::copy_fixture("streams/properorder.decls.json", &root);

    let out = common::run_in(&root, &["check", "--config", "alt/order.json"]);
    assert_eq!(out.status.code(), Some(0));
}

#[test]
/// Documents matching an ignore pattern are skipped.
fn test_check_ignore_patterns() {
    let (_dir, root) = common::setup_project(&[(
        ".properorder/properorder.json",
        r#"{ "ignore_patterns": ["**/vendor/**"] }"#,
    )]);
    std::fs::create_dir_all(root.join("vendor")).unwrap();
    common::copy_fixture("streams/properorder.decls.json", &root.join("vendor"));

    let out = common::run_in(&root, &["check", "--json"]);
    assert_eq!(out.status.code(), Some(0));
    let report: CheckReport = serde_json::from_slice(&out.stdout).unwrap();
    assert!(report.files_analyzed.is_empty());
}

#[test]
/// An invalid `checks` value in the config is reported as an error.
fn test_check_invalid_conf_exits_two() {
    let (_dir, root) = common::setup_project(&[(
        ".properorder/properorder.json",
        r#"{ "checks": true }"#,
    )]);
    let out = common::run_in(&root, &["check"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("conf must be a map"));
}
