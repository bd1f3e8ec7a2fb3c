//! Recent files: most-recently-opened paths.
//!
//! Paths are kept in MRU order with a small capacity. Re-opening a path
//! moves it to the front rather than duplicating it. Equality is plain
//! `Path` equality; no canonicalisation happens here.

use std::path::{Path, PathBuf};

/// Default number of entries kept.
pub const DEFAULT_CAPACITY: usize = 5;

/// MRU list of opened file paths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecentFiles {
    entries: Vec<PathBuf>,
    capacity: usize,
}

impl Default for RecentFiles {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl RecentFiles {
    #[must_use]
    pub const fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Record `path` as the most recently opened file.
    pub fn touch(&mut self, path: &Path) {
        self.entries.retain(|p| p != path);
        self.entries.insert(0, path.to_path_buf());
        self.entries.truncate(self.capacity);
    }

    /// Change the capacity, dropping the oldest entries if it shrank.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.entries.truncate(capacity);
    }

    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entry `index`, 0 being the most recent.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Path> {
        self.entries.get(index).map(PathBuf::as_path)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(PathBuf::as_path)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn paths(recent: &RecentFiles) -> Vec<String> {
        recent.iter().map(|p| p.display().to_string()).collect()
    }

    #[test]
    fn most_recent_first() {
        let mut recent = RecentFiles::default();
        recent.touch(Path::new("a"));
        recent.touch(Path::new("b"));
        assert_eq!(paths(&recent), vec!["b", "a"]);
        assert_eq!(recent.get(0), Some(Path::new("b")));
    }

    #[test]
    fn capacity_drops_oldest() {
        let mut recent = RecentFiles::default();
        for name in ["1", "2", "3", "4", "5", "6"] {
            recent.touch(Path::new(name));
        }
        assert_eq!(recent.len(), 5);
        assert_eq!(paths(&recent), vec!["6", "5", "4", "3", "2"]);
    }

    #[test]
    fn retouch_moves_to_front_without_duplicate() {
        let mut recent = RecentFiles::default();
        for name in ["a", "b", "c"] {
            recent.touch(Path::new(name));
        }
        recent.touch(Path::new("a"));
        assert_eq!(paths(&recent), vec!["a", "c", "b"]);
    }

    #[test]
    fn shrinking_capacity_truncates() {
        let mut recent = RecentFiles::with_capacity(3);
        for name in ["a", "b", "c"] {
            recent.touch(Path::new(name));
        }
        recent.set_capacity(1);
        assert_eq!(paths(&recent), vec!["c"]);
        assert_eq!(recent.capacity(), 1);
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let mut recent = RecentFiles::with_capacity(0);
        recent.touch(Path::new("a"));
        assert!(recent.is_empty());
        assert_eq!(recent.get(0), None);
    }
}
