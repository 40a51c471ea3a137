use std::fs;
use std::path::Path;

use rayon::prelude::*;

use crate::checker::{CheckResult, Checker, RegexpCheck, build_checks};
use crate::cli::{CheckArgs, Cli, ColorChoice};
use crate::config::{
    CLI_CHECK_ID, CheckConfig, Config, ConfigLoader, FileConfigLoader, validate_config,
};
use crate::detector::DEFAULT_ERROR_LIMIT;
use crate::output::{ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use crate::scanner::{DirectoryScanner, FileScanner, ScanFilter};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS_FOUND, RegexpGuardError, Result};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            tracing::debug!(kind = e.error_type(), "check aborted");
            super::print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Runs the check command and returns its exit code.
///
/// Every configured pattern is compiled before any file is read, so a bad
/// pattern fails once instead of once per file.
///
/// # Errors
/// Returns an error for invalid configuration, unreadable paths, or a
/// failure writing the report.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    // 1. Load configuration
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, args);
    validate_config(&config)?;

    // 3. Compile checks; regex errors surface here
    let checks = build_checks(&config.checks)?;
    if checks.is_empty() {
        return Err(RegexpGuardError::Config(
            "No checks configured. Pass --pattern or add [[checks]] to the config file."
                .to_string(),
        ));
    }

    // 4. Discover files
    let filter = ScanFilter::new(config.scanner.extensions.clone(), &config.scanner.exclude)?;
    let scanner = DirectoryScanner::new(filter).with_gitignore(config.scanner.gitignore);
    let files = scanner.scan_all(&args.paths)?;
    tracing::info!(files = files.len(), checks = checks.len(), "starting scan");

    // 5. Check files in parallel; collect keeps file order
    let results: Vec<CheckResult> = files
        .par_iter()
        .filter_map(|path| check_file(path, &checks))
        .flatten()
        .collect();

    // 6. Format and write output
    let color_mode = color_choice_to_mode(cli.color);
    let output = format_output(args.format, &results, color_mode, cli.verbose)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 7. Determine exit code
    let has_violations = results.iter().any(CheckResult::is_failed);
    if has_violations && !args.warn_only {
        Ok(EXIT_VIOLATIONS_FOUND)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(pattern) = &args.pattern {
        config.checks.push(CheckConfig {
            id: Some(CLI_CHECK_ID.to_string()),
            pattern: pattern.clone(),
            message: args.message.clone(),
            ignore_case: args.ignore_case,
            error_limit: args.error_limit.unwrap_or(DEFAULT_ERROR_LIMIT),
        });
    }

    if let Some(ext) = &args.ext {
        config.scanner.extensions.clone_from(ext);
    }

    config.scanner.exclude.extend(args.exclude.iter().cloned());

    if args.no_gitignore {
        config.scanner.gitignore = false;
    }
}

/// Run every check against one file. Unreadable files are logged and
/// skipped; invalid UTF-8 is replaced rather than rejected.
fn check_file(path: &Path, checks: &[RegexpCheck]) -> Option<Vec<CheckResult>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(source) => {
            let err = RegexpGuardError::FileRead {
                path: path.to_path_buf(),
                source,
            };
            tracing::warn!(error = %err, detail = ?err.detail(), "skipping file");
            return None;
        }
    };
    let content = String::from_utf8_lossy(&bytes);

    let results: Vec<CheckResult> = checks
        .iter()
        .map(|check| check.check(path, &content))
        .collect();

    let violations: usize = results.iter().map(|r| r.violations().len()).sum();
    tracing::debug!(path = %path.display(), violations, "checked file");
    Some(results)
}

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn format_output(
    format: OutputFormat,
    results: &[CheckResult],
    color_mode: ColorMode,
    verbose: u8,
) -> Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(results),
        OutputFormat::Json => JsonFormatter.format(results),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
