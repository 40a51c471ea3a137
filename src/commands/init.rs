use std::fs;

use crate::cli::InitArgs;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, RegexpGuardError, Result};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            super::print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(RegexpGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;
    tracing::debug!(path = %output_path.display(), "wrote configuration template");

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# regexp-guard configuration file
version = "1"

[scanner]
# Respect .gitignore files (default: true)
gitignore = true

# File extensions to check (empty = every file)
extensions = ["java", "kt", "rs", "py", "js", "ts"]

# Exclude patterns (glob syntax)
exclude = [
    "**/target/**",
    "**/build/**",
    "**/node_modules/**",
]

# Each [[checks]] entry reports physical lines matching `pattern`.
# Matching is containment: anchor with ^ and $ to match whole lines.
[[checks]]
id = "no-console"
pattern = 'System\.(out|err)\.print'
message = "Use a logger instead of printing to the console."
# Match case-insensitively (default: false)
ignore_case = false
# Stop reporting a file after this many violations (default: 100)
error_limit = 100

# [[checks]]
# id = "no-trailing-whitespace"
# pattern = '[ \t]+$'
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
