use regex::{Regex, RegexBuilder};

use crate::error::{RegexpGuardError, Result};

/// A compiled illegal-line pattern.
///
/// Case-insensitive mode is fixed at construction and uses the `regex`
/// crate's Unicode simple case folding. Multi-line mode is never enabled,
/// so `^` and `$` anchor to the start and end of the physical line being
/// tested; a trailing `\r` left by the line splitter sits before `$`.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    regex: Regex,
    source: String,
    ignore_case: bool,
}

impl PatternMatcher {
    /// Compile `source` as a regular expression.
    ///
    /// # Errors
    /// Returns `InvalidRegex` if the pattern does not compile, including
    /// constructs the `regex` dialect does not support (backreferences,
    /// look-around) and patterns exceeding the compiled size limit.
    pub fn new(source: &str, ignore_case: bool) -> Result<Self> {
        let regex = RegexBuilder::new(source)
            .case_insensitive(ignore_case)
            .build()
            .map_err(|e| RegexpGuardError::InvalidRegex {
                pattern: source.to_string(),
                source: e,
            })?;

        Ok(Self {
            regex,
            source: source.to_string(),
            ignore_case,
        })
    }

    /// True if the pattern matches anywhere in `line`.
    #[must_use]
    pub fn matches(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }

    /// The pattern text as configured.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub const fn ignore_case(&self) -> bool {
        self.ignore_case
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
