use serde::{Deserialize, Serialize};

use crate::detector::DEFAULT_ERROR_LIMIT;

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Check id used for a pattern passed on the command line.
pub const CLI_CHECK_ID: &str = "cli";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Config schema version. Missing means current.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// File discovery settings.
    #[serde(default)]
    pub scanner: ScannerConfig,

    /// Illegal-pattern checks [[checks]].
    #[serde(default)]
    pub checks: Vec<CheckConfig>,
}

/// Scanner configuration for file discovery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Respect .gitignore rules (default: true)
    #[serde(default = "default_true")]
    pub gitignore: bool,

    /// File extensions to scan. Empty means every file.
    #[serde(default)]
    pub extensions: Vec<String>,

    /// Glob patterns for files to skip.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            gitignore: true,
            extensions: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

/// A single illegal-pattern check [[checks]].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckConfig {
    /// Name shown in reports. Defaults to the pattern text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Regular expression matched against each physical line.
    #[serde(alias = "format")]
    pub pattern: String,

    /// Replaces the default violation message when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, alias = "ignoreCase")]
    pub ignore_case: bool,

    /// Maximum violations reported per file.
    #[serde(default = "default_error_limit", alias = "errorLimit")]
    pub error_limit: usize,
}

impl CheckConfig {
    #[must_use]
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            id: None,
            pattern: pattern.into(),
            message: None,
            ignore_case: false,
            error_limit: DEFAULT_ERROR_LIMIT,
        }
    }

    #[must_use]
    pub fn display_id(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.pattern)
    }
}

const fn default_true() -> bool {
    true
}

const fn default_error_limit() -> usize {
    DEFAULT_ERROR_LIMIT
}
