use globset::Glob;

use crate::detector::ErrorLimit;
use crate::error::{RegexpGuardError, Result};

use super::Config;
use super::model::CONFIG_VERSION;

pub(super) fn validate_config_version(config: &Config) -> Result<()> {
    match &config.version {
        None => Ok(()),
        Some(v) if v == CONFIG_VERSION => Ok(()),
        Some(v) => Err(RegexpGuardError::Config(format!(
            "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
        ))),
    }
}

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns the first problem found: an unsupported version, a zero error
/// limit, a duplicate check id, or an invalid exclude glob. Patterns are
/// compiled by `checker::build_checks`, which reports regex errors.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_config_version(config)?;
    validate_checks(config)?;
    validate_exclude_globs(config)?;
    Ok(())
}

fn validate_checks(config: &Config) -> Result<()> {
    let mut seen = std::collections::HashSet::new();
    for check in &config.checks {
        ErrorLimit::new(check.error_limit)?;

        if let Some(id) = check.id.as_deref()
            && !seen.insert(id)
        {
            return Err(RegexpGuardError::Config(format!("Duplicate check id '{id}'")));
        }
    }
    Ok(())
}

fn validate_exclude_globs(config: &Config) -> Result<()> {
    for pattern in &config.scanner.exclude {
        Glob::new(pattern).map_err(|e| RegexpGuardError::InvalidGlob {
            pattern: pattern.clone(),
            source: e,
        })?;
    }
    Ok(())
}
