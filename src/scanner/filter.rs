use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{RegexpGuardError, Result};

pub trait FileFilter {
    /// Whether a file found while walking a directory should be checked.
    fn should_include(&self, path: &Path) -> bool;

    /// Whether a file named explicitly on the command line should be checked.
    /// Defaults to `should_include`.
    fn should_include_explicit(&self, path: &Path) -> bool {
        self.should_include(path)
    }
}

/// Extension allow-list plus glob exclusions.
pub struct ScanFilter {
    extensions: Vec<String>,
    exclude_patterns: GlobSet,
}

impl ScanFilter {
    /// Create a filter for the given extensions (empty = all) and excludes.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(extensions: Vec<String>, exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| RegexpGuardError::InvalidGlob {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder.build().map_err(|e| RegexpGuardError::InvalidGlob {
            pattern: "combined patterns".to_string(),
            source: e,
        })?;

        let extensions = extensions
            .into_iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect();

        Ok(Self {
            extensions,
            exclude_patterns,
        })
    }

    fn has_valid_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }

        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }
}

impl FileFilter for ScanFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_valid_extension(path) && !self.is_excluded(path)
    }

    fn should_include_explicit(&self, path: &Path) -> bool {
        !self.is_excluded(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
