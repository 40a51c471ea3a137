mod json;
mod text;

pub use json::JsonFormatter;
pub use text::{ColorMode, TextFormatter};

use std::collections::BTreeSet;
use std::path::Path;

use crate::checker::CheckResult;
use crate::error::Result;

/// Trait for formatting check results into various output formats.
pub trait OutputFormatter {
    /// Format the check results into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, results: &[CheckResult]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Totals shared by every formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub files: usize,
    pub failed_files: usize,
    pub violations: usize,
}

impl Summary {
    #[must_use]
    pub fn from_results(results: &[CheckResult]) -> Self {
        let files: BTreeSet<&Path> = results.iter().map(CheckResult::path).collect();
        let failed_files: BTreeSet<&Path> = results
            .iter()
            .filter(|r| r.is_failed())
            .map(CheckResult::path)
            .collect();

        Self {
            files: files.len(),
            failed_files: failed_files.len(),
            violations: results.iter().map(|r| r.violations().len()).sum(),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
