use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegexpGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid regular expression: {pattern}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Error limit must be a positive integer, got {0}")]
    InvalidErrorLimit(usize),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl RegexpGuardError {
    /// Short name of the variant, used as a structured field in log events.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::InvalidRegex { .. } => "InvalidRegex",
            Self::InvalidErrorLimit(_) => "InvalidErrorLimit",
            Self::FileRead { .. } => "FileRead",
            Self::InvalidGlob { .. } => "InvalidGlob",
            Self::Io(_) => "Io",
            Self::TomlParse(_) => "TomlParse",
            Self::JsonSerialize(_) => "JsonSerialize",
        }
    }

    /// Underlying cause rendered for the user, if any.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::InvalidRegex { source, .. } => Some(source.to_string()),
            Self::FileRead { source, .. } => Some(source.to_string()),
            Self::InvalidGlob { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RegexpGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
