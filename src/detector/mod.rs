//! Line-by-line detection of an illegal pattern.
//!
//! A [`MultilineDetector`] owns the immutable parts of a check (pattern,
//! message, limit) and is safe to share between threads. Each file scan
//! gets its own [`DetectorRun`], which counts matching lines and stops as
//! soon as the error limit is reached.

mod limit;
mod message;
mod run;

pub use limit::{DEFAULT_ERROR_LIMIT, ErrorLimit};
pub use message::{ViolationMessage, default_message};
pub use run::{DetectorRun, RunState};

use crate::lines::{LineRecord, split_lines};
use crate::matcher::PatternMatcher;

/// A reported line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub line: usize,
    pub message: String,
}

impl Violation {
    #[must_use]
    pub const fn new(line: usize, message: String) -> Self {
        Self { line, message }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStatus {
    /// Every line was inspected.
    Done,
    /// Scanning stopped at the error limit.
    Truncated,
}

/// Result of scanning one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    pub violations: Vec<Violation>,
    pub status: ScanStatus,
}

impl ScanOutcome {
    #[must_use]
    pub const fn is_truncated(&self) -> bool {
        matches!(self.status, ScanStatus::Truncated)
    }
}

#[derive(Debug, Clone)]
pub struct MultilineDetector {
    matcher: PatternMatcher,
    message: ViolationMessage,
    limit: ErrorLimit,
}

impl MultilineDetector {
    #[must_use]
    pub const fn new(
        matcher: PatternMatcher,
        message: ViolationMessage,
        limit: ErrorLimit,
    ) -> Self {
        Self {
            matcher,
            message,
            limit,
        }
    }

    /// Split `content` into physical lines and scan them.
    #[must_use]
    pub fn scan(&self, content: &str) -> ScanOutcome {
        self.scan_lines(split_lines(content))
    }

    /// Scan lines in the order given, stopping at the error limit.
    #[must_use]
    pub fn scan_lines<'a, I>(&self, lines: I) -> ScanOutcome
    where
        I: IntoIterator<Item = LineRecord<'a>>,
    {
        let mut run = self.start();
        for line in lines {
            if run.feed(&line).is_break() {
                break;
            }
        }
        run.finish()
    }

    /// Begin a run that the caller drives line by line.
    #[must_use]
    pub fn start(&self) -> DetectorRun<'_> {
        DetectorRun::new(self)
    }

    #[must_use]
    pub const fn matcher(&self) -> &PatternMatcher {
        &self.matcher
    }

    #[must_use]
    pub const fn message(&self) -> &ViolationMessage {
        &self.message
    }

    #[must_use]
    pub const fn limit(&self) -> ErrorLimit {
        self.limit
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
