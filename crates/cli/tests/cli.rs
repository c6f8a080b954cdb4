// ABOUTME: Integration tests for the tabsheet CLI binary.
// ABOUTME: Tests default fixed paths, explicit paths, options and failure handling.

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo::CommandCargoExt;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

const EXPORT_HTML: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>4 Tabs Saved</title><style>body{color:red;}</style></head>
<body>
<ul><li>Saved 2024-05-01</li><li>Firefox 126</li></ul>
<dl>
  <dt><a href="https://news.example/a">News</a></dt><dd>one</dd>
  <dt><a href="https://mail.example/inbox">Mail</a></dt><dd>two</dd>
  <dt><a href="https://docs.example/x">Docs</a></dt><dd>three</dd>
  <dt><a href="https://blog.example/y">Blog</a></dt><dd>four</dd>
</dl>
</body>
</html>"#;

fn tabsheet_cmd() -> Command {
    Command::cargo_bin("tabsheet").unwrap()
}

#[test]
fn default_paths_in_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("toFormat.html"), EXPORT_HTML).unwrap();

    tabsheet_cmd()
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "HTML has been reformatted and saved as 'reformatted.html'",
        ));

    let output = fs::read_to_string(temp_dir.path().join("reformatted.html")).unwrap();
    assert!(output.contains(r#"class="browser-data""#));
    assert!(output.contains("body{color:red;}"));
    assert_eq!(output.matches(r#"target="_blank""#).count(), 4);
    assert!(!output.contains("<dl>"));
}

#[test]
fn explicit_input_and_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("export.html");
    let output = temp_dir.path().join("out.html");
    fs::write(&input, EXPORT_HTML).unwrap();

    tabsheet_cmd()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--block")
        .arg("mail.example")
        .arg("--target")
        .arg("_new")
        .assert()
        .success();

    let html = fs::read_to_string(&output).unwrap();
    assert!(!html.contains("Mail"));
    assert_eq!(html.matches(r#"target="_new""#).count(), 3);
}

#[test]
fn missing_input_fails() {
    let temp_dir = TempDir::new().unwrap();

    tabsheet_cmd()
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading toFormat.html"));

    assert!(!temp_dir.path().join("reformatted.html").exists());
}

#[test]
fn structural_error_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("toFormat.html"),
        "<html><head><style></style></head><body><dl></dl></body></html>",
    )
    .unwrap();

    tabsheet_cmd()
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("required <ul> element not found"));

    assert!(!temp_dir.path().join("reformatted.html").exists());
}

#[test]
fn zero_columns_rejected() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("toFormat.html"), EXPORT_HTML).unwrap();

    tabsheet_cmd()
        .current_dir(temp_dir.path())
        .arg("--columns")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("columns must be at least 1"));
}

#[test]
fn oversized_columns_rejected() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("toFormat.html"), EXPORT_HTML).unwrap();

    tabsheet_cmd()
        .current_dir(temp_dir.path())
        .arg("--columns")
        .arg(usize::MAX.to_string())
        .assert()
        .failure()
        .stderr(predicate::str::contains("columns must be at most 96"));

    assert!(!temp_dir.path().join("reformatted.html").exists());
}

#[test]
fn timing_flag_prints_elapsed() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("toFormat.html"), EXPORT_HTML).unwrap();

    tabsheet_cmd()
        .current_dir(temp_dir.path())
        .arg("--timing")
        .assert()
        .success()
        .stderr(predicate::str::contains("elapsed:"));
}
