use std::fmt::Write;

use crate::checker::CheckResult;
use crate::error::Result;

use super::{OutputFormatter, Summary};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Human-readable report: one `path:line: message [check]` row per violation.
pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn format_failed(&self, result: &CheckResult, output: &mut String) {
        let location = result.path().display().to_string();
        let id = self.paint(&format!("[{}]", result.check_id()), ansi::DIM);

        for violation in result.violations() {
            let position = self.paint(&format!("{location}:{}", violation.line), ansi::RED);
            let _ = writeln!(output, "{position}: {} {id}", violation.message);
        }

        if result.is_truncated() && self.verbose >= 1 {
            let note = self.paint("error limit reached, later lines not scanned", ansi::YELLOW);
            let _ = writeln!(output, "{location}: {note} {id}");
        }
    }

    fn format_passed(&self, result: &CheckResult, output: &mut String) {
        let status = self.paint("PASSED", ansi::GREEN);
        let _ = writeln!(
            output,
            "{status}: {} [{}]",
            result.path().display(),
            result.check_id()
        );
    }

    fn format_summary(&self, summary: Summary, output: &mut String) {
        if summary.violations == 0 {
            let _ = writeln!(
                output,
                "{} in {} file(s)",
                self.paint("No violations found", ansi::GREEN),
                summary.files
            );
            return;
        }

        let count = self.paint(&format!("{} violation(s)", summary.violations), ansi::RED);
        let _ = writeln!(
            output,
            "Found {count} in {} of {} file(s)",
            summary.failed_files, summary.files
        );
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, results: &[CheckResult]) -> Result<String> {
        let mut output = String::new();

        for result in results {
            if result.is_failed() {
                self.format_failed(result, &mut output);
            } else if self.verbose >= 1 {
                self.format_passed(result, &mut output);
            }
        }

        if results.iter().any(CheckResult::is_failed) {
            output.push('\n');
        }
        self.format_summary(Summary::from_results(results), &mut output);

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
