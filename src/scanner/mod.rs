mod filter;

pub use filter::{FileFilter, ScanFilter};

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use walkdir::WalkDir;

use crate::error::{RegexpGuardError, Result};

const GIT_DIR: &str = ".git";

/// Trait for finding the files to check under a path.
pub trait FileScanner {
    /// Return every file to check under `root`. A `root` that is itself a
    /// file is returned as-is if the filter accepts it as an explicit path.
    ///
    /// # Errors
    /// Returns an error if `root` does not exist. Entries that cannot be
    /// read during the walk are logged and skipped.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;

    /// Scan several roots, returning a sorted list without duplicates.
    ///
    /// # Errors
    /// Returns the first error from any root.
    fn scan_all(&self, roots: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut files = BTreeSet::new();
        for root in roots {
            files.extend(self.scan(root)?);
        }
        Ok(files.into_iter().collect())
    }
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    gitignore: bool,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self {
            filter,
            gitignore: true,
        }
    }

    /// Toggle `.gitignore` handling (enabled by default). With it enabled,
    /// hidden files and directories are skipped as well; without it, only
    /// `.git` is skipped.
    #[must_use]
    pub const fn with_gitignore(mut self, gitignore: bool) -> Self {
        self.gitignore = gitignore;
        self
    }

    fn walk_gitignore(&self, root: &Path) -> Vec<PathBuf> {
        WalkBuilder::new(root)
            .git_ignore(true)
            .git_exclude(true)
            .require_git(false)
            .build()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable entry");
                    None
                }
            })
            .filter(|e| e.file_type().is_some_and(|t| t.is_file()))
            .map(ignore::DirEntry::into_path)
            .filter(|p| self.filter.should_include(p))
            .collect()
    }

    fn walk_plain(&self, root: &Path) -> Vec<PathBuf> {
        WalkDir::new(root)
            .into_iter()
            .filter_entry(|e| e.file_name() != OsStr::new(GIT_DIR))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable entry");
                    None
                }
            })
            .filter(|e| e.file_type().is_file())
            .map(walkdir::DirEntry::into_path)
            .filter(|p| self.filter.should_include(p))
            .collect()
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if root.is_file() {
            let accepted = self.filter.should_include_explicit(root);
            return Ok(if accepted {
                vec![root.to_path_buf()]
            } else {
                Vec::new()
            });
        }

        if !root.exists() {
            return Err(RegexpGuardError::Config(format!(
                "Path does not exist: {}",
                root.display()
            )));
        }

        let files = if self.gitignore {
            self.walk_gitignore(root)
        } else {
            self.walk_plain(root)
        };
        tracing::debug!(root = %root.display(), files = files.len(), "scanned directory");
        Ok(files)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
