//! Integration tests for the `init` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn init_creates_default_config_file() {
    let fixture = TestFixture::new();

    regexp_guard!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let content = std::fs::read_to_string(fixture.path().join(".regexp-guard.toml")).unwrap();
    assert!(content.contains("[[checks]]"));
    assert!(content.contains("error_limit"));
}

#[test]
fn init_creates_config_at_custom_path() {
    let fixture = TestFixture::new();
    let custom_path = fixture.path().join("custom-config.toml");

    regexp_guard!()
        .current_dir(fixture.path())
        .args(["init", "--output", custom_path.to_str().unwrap()])
        .assert()
        .success();

    assert!(custom_path.exists());
}

#[test]
fn init_fails_if_config_exists() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing config\n");

    regexp_guard!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn init_force_overwrites_existing_config() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing config\n");

    regexp_guard!()
        .current_dir(fixture.path())
        .args(["init", "--force"])
        .assert()
        .success();

    let content = std::fs::read_to_string(fixture.path().join(".regexp-guard.toml")).unwrap();
    assert!(content.contains("[scanner]"));
}

#[test]
fn generated_config_drives_check() {
    let fixture = TestFixture::new();
    fixture.create_file(
        "src/App.java",
        "class App {\n    void f() { System.out.println(1); }\n}\n",
    );

    regexp_guard!()
        .current_dir(fixture.path())
        .args(["init"])
        .assert()
        .success();

    regexp_guard!()
        .current_dir(fixture.path())
        .args(["check", "--color", "never"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("App.java:2: Use a logger"))
        .stdout(predicate::str::contains("[no-console]"));
}
