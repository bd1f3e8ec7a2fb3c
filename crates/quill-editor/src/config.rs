//! Editor configuration values.
//!
//! Plain values with defaults; [`options`](crate::options) changes them.

use crate::recent::DEFAULT_CAPACITY;

/// Tunables for the editor core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// How many paths the recent-files list keeps.
    pub recent_capacity: usize,
    /// Spaces inserted by the Tab key.
    pub tabstop: usize,
    /// Whether hosts should run the highlighter at all.
    pub syntax: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            recent_capacity: DEFAULT_CAPACITY,
            tabstop: 4,
            syntax: true,
        }
    }
}
