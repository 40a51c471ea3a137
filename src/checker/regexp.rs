use std::path::Path;

use crate::config::CheckConfig;
use crate::detector::{ErrorLimit, MultilineDetector, ViolationMessage};
use crate::error::Result;
use crate::matcher::PatternMatcher;

use super::{CheckResult, Checker};

/// Reports lines matching an illegal pattern.
///
/// The pattern is compiled once when the check is built and shared
/// read-only by every file scan. Per-file state lives in the detector run
/// created inside `check`.
#[derive(Debug, Clone)]
pub struct RegexpCheck {
    id: String,
    detector: MultilineDetector,
}

impl RegexpCheck {
    #[must_use]
    pub fn new(id: impl Into<String>, detector: MultilineDetector) -> Self {
        Self {
            id: id.into(),
            detector,
        }
    }

    /// Build a check from its configuration.
    ///
    /// # Errors
    /// Returns `InvalidRegex` for a pattern that does not compile and
    /// `InvalidErrorLimit` for a zero limit. Nothing is scanned on failure.
    pub fn from_config(config: &CheckConfig) -> Result<Self> {
        let matcher = PatternMatcher::new(&config.pattern, config.ignore_case)?;
        let limit = ErrorLimit::new(config.error_limit)?;
        let message = ViolationMessage::resolve(config.message.as_deref(), &config.pattern);

        Ok(Self::new(
            config.display_id(),
            MultilineDetector::new(matcher, message, limit),
        ))
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub const fn detector(&self) -> &MultilineDetector {
        &self.detector
    }
}

impl Checker for RegexpCheck {
    fn check(&self, path: &Path, content: &str) -> CheckResult {
        let outcome = self.detector.scan(content);

        if outcome.violations.is_empty() {
            return CheckResult::Passed {
                path: path.to_path_buf(),
                check_id: self.id.clone(),
            };
        }

        let truncated = outcome.is_truncated();
        CheckResult::Failed {
            path: path.to_path_buf(),
            check_id: self.id.clone(),
            violations: outcome.violations,
            truncated,
        }
    }
}
