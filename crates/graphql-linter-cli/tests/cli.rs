use graphql_linter_test_utils::fixtures::{CLEAN_BASELINE, MESSY_SCHEMA};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// A project root marked by its (possibly empty) config file
fn project(config: &str, schemas: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".graphql-linter.yml"), config).unwrap();
    for (name, contents) in schemas {
        fs::write(dir.path().join(name), contents).unwrap();
    }
    dir
}

fn run(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_graphql-linter"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .unwrap()
}

#[test]
fn test_clean_project_exits_zero() {
    let dir = project("", &[("schema.graphql", CLEAN_BASELINE)]);

    let output = run(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("All 1 schema file(s) passed linting successfully!"));
    assert!(stdout.contains("Error type summary:\n"));
}

#[test]
fn test_lint_errors_exit_one() {
    let dir = project(
        "",
        &[("clean.graphql", CLEAN_BASELINE), ("messy.graphql", MESSY_SCHEMA)],
    );

    let output = run(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Error type summary:"));
    assert!(stdout.contains("  suspicious-enum-value: 1"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("totalErrors: 11"));
}

#[test]
fn test_json_output() {
    let dir = project("", &[("messy.graphql", MESSY_SCHEMA)]);

    let output = run(dir.path(), &["--format", "json"]);

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["summary"]["totalFiles"], 1);
    assert_eq!(json["summary"]["filesWithAtLeastOneError"], 1);
    assert_eq!(json["diagnostics"].as_array().unwrap().len(), 11);
    assert_eq!(json["diagnostics"][0]["line"], 1);
}

#[test]
fn test_suppressions_make_the_run_pass() {
    let config = r"
settings:
  strictMode: false
  checkDescriptions: false
suppressions:
  - rule: fields-are-camel-cased
    reason: Legacy field
  - rule: suspicious-enum-value
    value: BLUE2
    reason: Brand colour
";
    let dir = project(config, &[("messy.graphql", MESSY_SCHEMA)]);

    let output = run(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_target_path_selects_one_file() {
    let dir = project(
        "",
        &[("clean.graphql", CLEAN_BASELINE), ("messy.graphql", MESSY_SCHEMA)],
    );

    let output = run(dir.path(), &["--targetPath", "clean.graphql"]);

    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_missing_explicit_config_exits_two() {
    let dir = project("", &[("schema.graphql", CLEAN_BASELINE)]);

    let output = run(dir.path(), &["--configPath", "missing.yml"]);

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_invalid_config_exits_two() {
    let dir = project("settings: [", &[("schema.graphql", CLEAN_BASELINE)]);

    let output = run(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_suppression_without_selectors_does_not_abort() {
    let dir = project("suppressions:\n  - reason: legacy\n", &[("messy.graphql", MESSY_SCHEMA)]);

    let output = run(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("hides every diagnostic"));
}

#[test]
fn test_missing_target_exits_four() {
    let dir = project("", &[("schema.graphql", CLEAN_BASELINE)]);

    let output = run(dir.path(), &["--target-path", "nowhere"]);

    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_directory_without_schemas_exits_four() {
    let dir = project("", &[]);

    let output = run(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(4));
}
