//! Outcome of one retention pass.

use std::path::PathBuf;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CleanupResult {
    /// Period directories removed, oldest first.
    pub deleted: Vec<PathBuf>,
    /// Period directories left on disk, the current one included.
    pub retained: usize,
}

impl CleanupResult {
    #[must_use]
    pub fn count(&self) -> usize {
        self.deleted.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deleted.is_empty()
    }
}
