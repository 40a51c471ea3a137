//! Configuration loading and validation.
//!
//! `regexp-guard` reads `.regexp-guard.toml` from the current directory or
//! the user config directory. Overrides precedence: CLI > config file >
//! defaults.

mod loader;
mod model;
mod validation;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem, parse_config,
};
pub use model::{CLI_CHECK_ID, CONFIG_VERSION, CheckConfig, Config, ScannerConfig};
pub use validation::validate_config;

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
