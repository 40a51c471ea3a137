//! Integration tests for the `check` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

const CONSOLE: &str = r"System\.(out)|(err)\.print(ln)?\(";
const CONSOLE_UPPER: &str = r"SYSTEM\.(OUT)|(ERR)\.PRINT(LN)?\(";

fn semantic_fixture() -> TestFixture {
    let fixture = TestFixture::new();
    fixture.create_semantic_input("InputSemantic.java");
    fixture
}

// =============================================================================
// Checkstyle compatibility scenarios
// =============================================================================

#[test]
fn console_output_reported_with_default_message() {
    let fixture = semantic_fixture();

    regexp_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "--color", "never", "-p", CONSOLE])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(format!(
            "InputSemantic.java:69: Line matches the illegal pattern '{CONSOLE}'. [cli]"
        )))
        .stdout(predicate::str::contains("Found 1 violation(s) in 1 of 1 file(s)"));
}

#[test]
fn message_override_replaces_default() {
    let fixture = semantic_fixture();

    regexp_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "--color", "never", "-p", CONSOLE])
        .args(["--message", "Bad line :("])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("InputSemantic.java:69: Bad line :( [cli]"))
        .stdout(predicate::str::contains("illegal pattern").not());
}

#[test]
fn ignore_case_matches_upper_case_pattern() {
    let fixture = semantic_fixture();

    regexp_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "--color", "never", "-p", CONSOLE_UPPER])
        .arg("--ignore-case")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("InputSemantic.java:69:"));
}

#[test]
fn case_sensitive_upper_case_pattern_passes() {
    let fixture = semantic_fixture();

    regexp_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "--color", "never", "-p", CONSOLE_UPPER])
        .assert()
        .success()
        .stdout(predicate::str::contains("No violations found in 1 file(s)"));
}

#[test]
fn error_limit_truncates_report() {
    let fixture = semantic_fixture();

    regexp_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "--color", "never", "-p", "^import"])
        .args(["--error-limit", "2"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("InputSemantic.java:7:"))
        .stdout(predicate::str::contains("InputSemantic.java:8:"))
        .stdout(predicate::str::contains("InputSemantic.java:9:").not())
        .stdout(predicate::str::contains("error limit reached").not());
}

#[test]
fn verbose_notes_truncation() {
    let fixture = semantic_fixture();

    regexp_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "--color", "never", "-v", "-p", "^import"])
        .args(["--error-limit", "2"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("error limit reached, later lines not scanned"));
}

#[test]
fn default_error_limit_reports_every_import() {
    let fixture = semantic_fixture();

    regexp_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "--color", "never", "-p", "^import"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("InputSemantic.java:9:"))
        .stdout(predicate::str::contains("error limit reached").not());
}

#[test]
fn carriage_return_stays_on_its_line() {
    let fixture = TestFixture::new();
    fixture.create_file("cr.txt", "first line \r\n second line \n\r third line");

    let output = regexp_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "-f", "json", "-p", r"\r"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let lines: Vec<u64> = json["results"][0]["violations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["line"].as_u64().unwrap())
        .collect();
    assert_eq!(lines, vec![1, 3]);
}

// =============================================================================
// Configuration and discovery
// =============================================================================

#[test]
fn config_file_checks_run_by_default() {
    let fixture = semantic_fixture();
    fixture.create_config(
        r#"
[scanner]
extensions = ["java"]

[[checks]]
id = "imports"
format = "^import"
errorLimit = 1
"#,
    );

    regexp_guard!()
        .current_dir(fixture.path())
        .args(["check", "--color", "never"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("InputSemantic.java:7:"))
        .stdout(predicate::str::contains("[imports]"))
        .stdout(predicate::str::contains("InputSemantic.java:8:").not());
}

#[test]
fn cli_pattern_runs_alongside_config_checks() {
    let fixture = semantic_fixture();
    fixture.create_config("[[checks]]\nid = \"imports\"\npattern = \"^import\"\n");

    regexp_guard!()
        .current_dir(fixture.path())
        .args(["check", "--color", "never", "-p", CONSOLE])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[imports]"))
        .stdout(predicate::str::contains("[cli]"))
        .stdout(predicate::str::contains("Found 4 violation(s) in 1 of 1 file(s)"));
}

#[test]
fn bad_pattern_reported_once() {
    let fixture = semantic_fixture();
    fixture.create_file("Other.java", "class Other {}\n");

    regexp_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "-p", "(unclosed"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid regular expression").count(1));
}

#[test]
fn missing_path_is_config_error() {
    let fixture = TestFixture::new();

    regexp_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "-p", "x", "does-not-exist"])
        .assert()
        .code(2);
}

#[test]
fn gitignored_files_are_skipped() {
    let fixture = TestFixture::new();
    fixture.create_file(".gitignore", "generated/\n");
    fixture.create_file("generated/Gen.java", "import gen;\n");
    fixture.create_file("src/Main.java", "class Main {}\n");

    regexp_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "--color", "never", "-p", "^import"])
        .assert()
        .success();

    regexp_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "--color", "never", "-p", "^import"])
        .args(["--no-gitignore", "--ext", "java"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Gen.java:1:"));
}

#[test]
fn exclude_glob_skips_files() {
    let fixture = TestFixture::new();
    fixture.create_file("vendor/Lib.java", "import lib;\n");

    regexp_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "-p", "^import", "-x", "**/vendor/**"])
        .assert()
        .success();
}

// =============================================================================
// Output options
// =============================================================================

#[test]
fn warn_only_exits_zero() {
    let fixture = semantic_fixture();

    regexp_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "--warn-only", "-p", "^import"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 3 violation(s)"));
}

#[test]
fn json_output_structure() {
    let fixture = semantic_fixture();

    let output = regexp_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "-f", "json", "-p", "^import", "--error-limit", "2"])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["summary"]["files"], 1);
    assert_eq!(json["summary"]["failed_files"], 1);
    assert_eq!(json["summary"]["violations"], 2);
    assert_eq!(json["results"][0]["check"], "cli");
    assert_eq!(json["results"][0]["status"], "failed");
    assert_eq!(json["results"][0]["truncated"], true);
}

#[test]
fn output_file_and_quiet() {
    let fixture = semantic_fixture();
    let report = fixture.path().join("report.txt");

    regexp_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "-q", "--color", "never", "--ext", "java"])
        .args(["-p", "^import", "-o", report.to_str().unwrap()])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(&report).unwrap();
    assert!(content.contains("InputSemantic.java:7:"));
}

#[test]
fn verbose_lists_passed_files() {
    let fixture = TestFixture::new();
    fixture.create_file("Clean.java", "class Clean {}\n");

    regexp_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "--color", "never", "-v", "-p", "^import"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASSED:"))
        .stdout(predicate::str::contains("Clean.java [cli]"));
}

#[test]
fn log_colour_follows_color_flag() {
    let fixture = semantic_fixture();

    regexp_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "-v", "-p", "^import"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("starting scan"))
        .stderr(predicate::str::contains("\x1b[").not());

    regexp_guard!()
        .current_dir(fixture.path())
        .args(["check", "--no-config", "-v", "--color", "always", "-p", "^import"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("\x1b["));
}
