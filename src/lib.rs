//! Report physical lines of source files that match illegal regular
//! expressions.
//!
//! The pipeline is [`lines`] (LF-only splitting) into [`matcher`]
//! (containment matching) into [`detector`] (per-file violations with an
//! error limit), wrapped by [`checker::RegexpCheck`] for the CLI.

pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod detector;
pub mod error;
pub mod lines;
pub mod logging;
pub mod matcher;
pub mod output;
pub mod scanner;

pub use error::{RegexpGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_VIOLATIONS_FOUND: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
