mod regexp;
mod result;

pub use regexp::RegexpCheck;
pub use result::CheckResult;

use std::path::Path;

use crate::config::CheckConfig;
use crate::error::Result;

pub trait Checker {
    /// Check the full text of one file.
    ///
    /// - `path`: Where the content came from (reported, never read)
    /// - `content`: The file content with its original line terminators
    fn check(&self, path: &Path, content: &str) -> CheckResult;
}

/// Compile every configured check, failing on the first invalid one.
///
/// # Errors
/// Returns the first pattern or error-limit problem found.
pub fn build_checks(configs: &[CheckConfig]) -> Result<Vec<RegexpCheck>> {
    configs.iter().map(RegexpCheck::from_config).collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
