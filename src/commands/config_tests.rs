use tempfile::TempDir;

use super::{run_config, run_config_validate_impl};
use crate::cli::{ConfigAction, ConfigArgs};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, RegexpGuardError};

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn validate_nonexistent_file_returns_error() {
    let path = std::path::Path::new("nonexistent_regexp_guard_config.toml");
    let err = run_config_validate_impl(path).unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn validate_invalid_toml_returns_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "this is not valid { toml }");

    let err = run_config_validate_impl(&path).unwrap_err();
    assert!(matches!(err, RegexpGuardError::TomlParse(_)));
}

#[test]
fn validate_minimal_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "# minimal valid config\n");

    assert!(run_config_validate_impl(&path).is_ok());
}

#[test]
fn validate_full_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        r#"
version = "1"

[scanner]
gitignore = false
extensions = ["java"]
exclude = ["**/generated/**"]

[[checks]]
id = "no-console"
pattern = 'System\.out\.println'
message = "Use a logger."

[[checks]]
id = "imports"
format = "^import"
ignoreCase = true
errorLimit = 2
"#,
    );

    assert!(run_config_validate_impl(&path).is_ok());
}

#[test]
fn validate_rejects_bad_pattern() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        r#"
[[checks]]
pattern = "("
"#,
    );

    let err = run_config_validate_impl(&path).unwrap_err();
    assert!(matches!(err, RegexpGuardError::InvalidRegex { .. }));
}

#[test]
fn validate_rejects_zero_error_limit() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        r#"
[[checks]]
pattern = "x"
error_limit = 0
"#,
    );

    let err = run_config_validate_impl(&path).unwrap_err();
    assert!(matches!(err, RegexpGuardError::InvalidErrorLimit(0)));
}

#[test]
fn run_config_exit_codes() {
    let temp_dir = TempDir::new().unwrap();
    let good = write_config(&temp_dir, "[[checks]]\npattern = \"x\"\n");
    let args = ConfigArgs {
        action: ConfigAction::Validate { config: good },
    };
    assert_eq!(run_config(&args), EXIT_SUCCESS);

    let args = ConfigArgs {
        action: ConfigAction::Validate {
            config: temp_dir.path().join("missing.toml"),
        },
    };
    assert_eq!(run_config(&args), EXIT_CONFIG_ERROR);
}
