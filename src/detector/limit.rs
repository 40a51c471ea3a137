use std::fmt;
use std::num::NonZeroUsize;

use crate::error::{RegexpGuardError, Result};

/// Number of violations a run reports when the configuration is silent.
pub const DEFAULT_ERROR_LIMIT: usize = 100;

/// Maximum number of violations a single file scan may emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ErrorLimit(NonZeroUsize);

impl ErrorLimit {
    /// # Errors
    /// Returns `InvalidErrorLimit` when `limit` is zero.
    pub fn new(limit: usize) -> Result<Self> {
        NonZeroUsize::new(limit)
            .map(Self)
            .ok_or(RegexpGuardError::InvalidErrorLimit(limit))
    }

    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for ErrorLimit {
    fn default() -> Self {
        Self(NonZeroUsize::new(DEFAULT_ERROR_LIMIT).unwrap_or(NonZeroUsize::MIN))
    }
}

impl fmt::Display for ErrorLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
