use std::ops::ControlFlow;

use crate::lines::LineRecord;

use super::{MultilineDetector, ScanOutcome, ScanStatus, Violation};

/// State of a run between two lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Still inspecting lines; `count` violations emitted so far.
    Scanning { count: usize },
    /// The error limit was reached; further lines are ignored.
    Truncated,
}

/// Per-file scan state. Created by [`MultilineDetector::start`] and
/// consumed by [`DetectorRun::finish`]; never shared between files.
#[derive(Debug)]
pub struct DetectorRun<'d> {
    detector: &'d MultilineDetector,
    message: String,
    violations: Vec<Violation>,
    state: RunState,
}

impl<'d> DetectorRun<'d> {
    pub(super) fn new(detector: &'d MultilineDetector) -> Self {
        Self {
            detector,
            message: detector.message().text().into_owned(),
            violations: Vec::new(),
            state: RunState::Scanning { count: 0 },
        }
    }

    /// Inspect one line. Returns `Break` once the error limit is reached,
    /// after which the caller should stop feeding lines.
    ///
    /// Lines must be fed in ascending line-number order.
    pub fn feed(&mut self, line: &LineRecord<'_>) -> ControlFlow<()> {
        let RunState::Scanning { count } = self.state else {
            return ControlFlow::Break(());
        };

        let count = if self.detector.matcher().matches(line.content) {
            self.violations.push(Violation::new(line.number, self.message.clone()));
            count + 1
        } else {
            count
        };

        if count >= self.detector.limit().get() {
            tracing::trace!(
                pattern = self.detector.matcher().source(),
                line = line.number,
                limit = count,
                "error limit reached, scan truncated"
            );
            self.state = RunState::Truncated;
            return ControlFlow::Break(());
        }

        self.state = RunState::Scanning { count };
        ControlFlow::Continue(())
    }

    #[must_use]
    pub const fn state(&self) -> RunState {
        self.state
    }

    /// Violations emitted so far, in line order.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// End the run, keeping whatever has been emitted. A run abandoned
    /// before the limit was reached finishes as `Done`.
    #[must_use]
    pub fn finish(self) -> ScanOutcome {
        let status = match self.state {
            RunState::Scanning { .. } => ScanStatus::Done,
            RunState::Truncated => ScanStatus::Truncated,
        };
        ScanOutcome {
            violations: self.violations,
            status,
        }
    }
}
