pub mod check;
pub mod config;
pub mod init;

pub use check::{run_check, run_check_impl};
pub use config::{run_config, run_config_validate_impl};
pub use init::{generate_config_template, run_init, run_init_impl};

use crate::RegexpGuardError;

/// Print a user-facing error to stderr, followed by its underlying cause.
pub(crate) fn print_error(e: &RegexpGuardError) {
    eprintln!("Error: {e}");
    if let Some(detail) = e.detail() {
        eprintln!("  Caused by: {detail}");
    }
}
