use std::path::{Path, PathBuf};

use crate::detector::Violation;

/// Outcome of running one check against one file.
///
/// Only `Failed` carries violations, so a passing result can never report
/// lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    Passed {
        path: PathBuf,
        check_id: String,
    },
    Failed {
        path: PathBuf,
        check_id: String,
        violations: Vec<Violation>,
        /// Scanning stopped at the error limit; later lines were not inspected.
        truncated: bool,
    },
}

impl CheckResult {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Passed { path, .. } | Self::Failed { path, .. } => path,
        }
    }

    #[must_use]
    pub fn check_id(&self) -> &str {
        match self {
            Self::Passed { check_id, .. } | Self::Failed { check_id, .. } => check_id,
        }
    }

    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Passed { .. } => &[],
            Self::Failed { violations, .. } => violations,
        }
    }

    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed { .. })
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        matches!(self, Self::Failed { truncated: true, .. })
    }
}
