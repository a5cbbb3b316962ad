//! End-to-end tests for the copyist binary

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn copyist() -> Command {
    Command::cargo_bin("copyist").unwrap()
}

fn write_config(dir: &Path, content: &str) {
    fs::write(dir.join("copyist.toml"), content).unwrap();
}

#[test]
fn sync_creates_managed_files() {
    let temp = TempDir::new().unwrap();
    write_config(
        temp.path(),
        r#"
[context]
edition = "2024"

[files]
"rustfmt.toml" = ["rustfmt.config"]
"#,
    );

    copyist()
        .current_dir(temp.path())
        .arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains("rustfmt.toml"));

    let content = fs::read_to_string(temp.path().join("rustfmt.toml")).unwrap();
    assert!(content.contains("edition = \"2024\""));
}

#[test]
fn second_sync_reports_nothing_and_keeps_bytes() {
    let temp = TempDir::new().unwrap();
    write_config(
        temp.path(),
        r#"
[files]
"rustfmt.toml" = ["rustfmt.config"]
"#,
    );

    copyist().current_dir(temp.path()).arg("sync").assert().success();
    let first = fs::read_to_string(temp.path().join("rustfmt.toml")).unwrap();

    copyist()
        .current_dir(temp.path())
        .arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains("everything up to date"));
    let second = fs::read_to_string(temp.path().join("rustfmt.toml")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn lint_tables_merge_into_a_handwritten_manifest() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("Cargo.toml"),
        "\
[package]
name = \"demo\"
version = \"0.1.0\"

# hand-maintained dependencies
[dependencies]
serde = \"1.0\"
",
    )
    .unwrap();
    write_config(
        temp.path(),
        r#"
[files]
"Cargo.toml" = ["cargo.rust-lints", "cargo.clippy-lints"]
"#,
    );

    copyist().current_dir(temp.path()).arg("sync").assert().success();

    let manifest = fs::read_to_string(temp.path().join("Cargo.toml")).unwrap();
    assert!(manifest.contains("# hand-maintained dependencies"));
    assert!(manifest.contains("[lints.rust]"));
    assert!(manifest.contains("[lints.clippy]"));
    assert!(manifest.contains("serde = \"1.0\""));

    // running again changes nothing
    copyist()
        .current_dir(temp.path())
        .arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains("everything up to date"));
    assert_eq!(
        manifest,
        fs::read_to_string(temp.path().join("Cargo.toml")).unwrap()
    );
}

#[test]
fn check_exits_one_and_prints_a_diff_on_drift() {
    let temp = TempDir::new().unwrap();
    write_config(
        temp.path(),
        r#"
[files]
"rustfmt.toml" = ["rustfmt.config"]
"#,
    );

    copyist()
        .current_dir(temp.path())
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("out of date"))
        .stdout(predicate::str::contains("+edition"))
        .stderr(predicate::str::contains("1 file(s) out of date"));

    // check never writes
    assert!(!temp.path().join("rustfmt.toml").exists());
}

#[test]
fn check_passes_after_sync() {
    let temp = TempDir::new().unwrap();
    write_config(
        temp.path(),
        r#"
[files]
"rustfmt.toml" = ["rustfmt.config"]
"#,
    );

    copyist().current_dir(temp.path()).arg("sync").assert().success();
    copyist()
        .current_dir(temp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("everything up to date"));
}

#[test]
fn dry_run_reports_without_writing() {
    let temp = TempDir::new().unwrap();
    write_config(
        temp.path(),
        r#"
[files]
"rustfmt.toml" = ["rustfmt.config"]
"#,
    );

    copyist()
        .current_dir(temp.path())
        .args(["sync", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("would rewrite"));

    assert!(!temp.path().join("rustfmt.toml").exists());
}

#[test]
fn unknown_transform_identifier_is_fatal() {
    let temp = TempDir::new().unwrap();
    write_config(
        temp.path(),
        r#"
[files]
"out" = ["no.such-transform"]
"#,
    );

    copyist()
        .current_dir(temp.path())
        .arg("sync")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown transform"));

    assert!(!temp.path().join("out").exists());
}

#[test]
fn missing_configuration_is_fatal() {
    let temp = TempDir::new().unwrap();

    copyist()
        .current_dir(temp.path())
        .arg("sync")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("configuration not found"));
}

#[test]
fn list_prints_builtin_identifiers() {
    copyist()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("rustfmt.config"))
        .stdout(predicate::str::contains("cargo.rust-lints"))
        .stdout(predicate::str::contains("cargo.clippy-lints"));
}
