use std::path::Path;

use crate::cli::{ConfigAction, ConfigArgs};
use crate::checker::build_checks;
use crate::config::{ConfigLoader, FileConfigLoader, validate_config};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_config(args: &ConfigArgs) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            super::print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or
/// names a pattern, limit, id, or glob that would be rejected by `check`.
pub fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    let config = FileConfigLoader::new().load_from_path(config_path)?;
    validate_config(&config)?;
    build_checks(&config.checks)?;
    tracing::info!(checks = config.checks.len(), "configuration validated");
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
