//! Diagnostic logging to stderr.
//!
//! Reports go to stdout; everything logged here goes to stderr so the two
//! never interleave in redirected output. `REGEXP_GUARD_LOG` accepts any
//! `tracing_subscriber::EnvFilter` directive and overrides the level
//! derived from `-q` / `-v`.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::cli::ColorChoice;

pub const LOG_ENV_VAR: &str = "REGEXP_GUARD_LOG";

/// Level directive for the given CLI flags.
#[must_use]
pub const fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Whether log lines on stderr should carry ANSI colour.
///
/// `Auto` colours only when stderr is a terminal and `NO_COLOR` is unset.
#[must_use]
pub fn use_ansi(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
        }
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(verbose: u8, quiet: bool, ansi: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
