//! Buffer registry: the set of open documents.
//!
//! The registry owns every open [`Buffer`] and hands out stable
//! [`BufferId`]s. It is the single source of truth the search and navigation
//! layers query; nothing else holds buffers.
//!
//! # Ordering
//!
//! Buffers are kept in registration order (the order tabs were opened).
//! [`BufferRegistry::all`] yields them in that order and search results are
//! ordered by it, so closing a buffer never reorders the others.
//!
//! # Threading
//!
//! There is no internal locking. A host that shares a registry between
//! threads must serialise `open`/`close`/edits/`save` itself.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::buffer::Buffer;
use crate::config::EditorConfig;
use crate::error::{EditorError, Result};
use crate::recent::RecentFiles;

// ---------------------------------------------------------------------------
// BufferId
// ---------------------------------------------------------------------------

/// Opaque handle to a registered buffer. Ids are never reused within one
/// registry, so a stale id fails with [`EditorError::UnknownBuffer`] instead
/// of silently naming a different document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferId(u64);

impl fmt::Display for BufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// BufferRegistry
// ---------------------------------------------------------------------------

/// Owns the open buffers and the recent-files history.
#[derive(Debug)]
pub struct BufferRegistry {
    buffers: Vec<(BufferId, Buffer)>,
    next_id: u64,
    recent: RecentFiles,
    tabstop: usize,
}

impl Default for BufferRegistry {
    fn default() -> Self {
        Self::with_config(&EditorConfig::default())
    }
}

impl BufferRegistry {
    /// An empty registry with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty registry configured from `config`.
    #[must_use]
    pub const fn with_config(config: &EditorConfig) -> Self {
        Self {
            buffers: Vec::new(),
            next_id: 0,
            recent: RecentFiles::with_capacity(config.recent_capacity),
            tabstop: config.tabstop,
        }
    }

    // -- Lifecycle ------------------------------------------------------------

    /// Register an existing buffer and return its id.
    pub fn insert(&mut self, buffer: Buffer) -> BufferId {
        let id = BufferId(self.next_id);
        self.next_id += 1;
        self.buffers.push((id, buffer));
        id
    }

    /// Register a new empty, pathless buffer (a new tab).
    pub fn new_untitled(&mut self) -> BufferId {
        let id = self.insert(Buffer::new());
        debug!(%id, "new untitled buffer");
        id
    }

    /// Read `path` into a new buffer and record it in the recent files.
    ///
    /// Opening a path that is already open registers a second buffer for it.
    ///
    /// # Errors
    ///
    /// [`EditorError::Io`] if the file is missing or unreadable. Nothing is
    /// registered and the recent files are untouched.
    pub fn open(&mut self, path: &Path) -> Result<BufferId> {
        let buffer = Buffer::from_file(path).inspect_err(|e| warn!("open failed: {e}"))?;
        let lines = buffer.line_count();
        let id = self.insert(buffer);
        self.recent.touch(path);
        info!(%id, path = %path.display(), lines, "opened");
        Ok(id)
    }

    /// Re-open entry `index` of the recent files (0 is the most recent).
    ///
    /// # Errors
    ///
    /// [`EditorError::NoRecentFile`] for an index past the end, or whatever
    /// [`open`](Self::open) fails with.
    pub fn open_recent(&mut self, index: usize) -> Result<BufferId> {
        let path = self
            .recent
            .get(index)
            .ok_or(EditorError::NoRecentFile(index))?
            .to_path_buf();
        self.open(&path)
    }

    /// Save buffer `id` to `target`, or to its own path when `target` is
    /// `None`. Returns the path written.
    ///
    /// # Errors
    ///
    /// [`EditorError::UnknownBuffer`], [`EditorError::NoTargetPath`] when
    /// neither a target nor a buffer path exists, or [`EditorError::Io`].
    pub fn save(&mut self, id: BufferId, target: Option<&Path>) -> Result<PathBuf> {
        let buffer = self.get_mut(id)?;
        let path = buffer
            .save(target)
            .inspect_err(|e| warn!(%id, "save failed: {e}"))?;
        info!(%id, path = %path.display(), "saved");
        Ok(path)
    }

    /// Re-read buffer `id` from its file.
    ///
    /// # Errors
    ///
    /// [`EditorError::UnknownBuffer`], [`EditorError::NoTargetPath`] for a
    /// pathless buffer, or [`EditorError::Io`] if the file no longer exists.
    pub fn reload(&mut self, id: BufferId) -> Result<()> {
        self.get_mut(id)?
            .reload()
            .inspect_err(|e| warn!(%id, "reload failed: {e}"))?;
        info!(%id, "reloaded");
        Ok(())
    }

    /// Remove buffer `id` and hand it back. Search results that referenced
    /// it no longer resolve.
    ///
    /// # Errors
    ///
    /// [`EditorError::UnknownBuffer`] if `id` is not registered.
    pub fn close(&mut self, id: BufferId) -> Result<Buffer> {
        let idx = self.position(id).ok_or(EditorError::UnknownBuffer(id))?;
        let (_, buffer) = self.buffers.remove(idx);
        if buffer.is_dirty() {
            warn!(%id, "closed with unsaved changes");
        } else {
            debug!(%id, "closed");
        }
        Ok(buffer)
    }

    // -- Editing --------------------------------------------------------------

    /// The Tab key: insert `tabstop` spaces at `offset` in buffer `id`.
    /// Returns the offset just after the indent.
    ///
    /// # Errors
    ///
    /// [`EditorError::UnknownBuffer`], or
    /// [`EditorError::OffsetOutOfRange`] past the end of the buffer.
    pub fn insert_indent(&mut self, id: BufferId, offset: usize) -> Result<usize> {
        let width = self.tabstop;
        self.get_mut(id)?.insert_indent(offset, width)
    }

    /// Spaces inserted by [`insert_indent`](Self::insert_indent).
    #[inline]
    #[must_use]
    pub const fn tabstop(&self) -> usize {
        self.tabstop
    }

    // -- Lookup ---------------------------------------------------------------

    /// # Errors
    ///
    /// [`EditorError::UnknownBuffer`] if `id` is not registered.
    pub fn get(&self, id: BufferId) -> Result<&Buffer> {
        self.buffers
            .iter()
            .find(|(bid, _)| *bid == id)
            .map(|(_, b)| b)
            .ok_or(EditorError::UnknownBuffer(id))
    }

    /// # Errors
    ///
    /// [`EditorError::UnknownBuffer`] if `id` is not registered.
    pub fn get_mut(&mut self, id: BufferId) -> Result<&mut Buffer> {
        self.buffers
            .iter_mut()
            .find(|(bid, _)| *bid == id)
            .map(|(_, b)| b)
            .ok_or(EditorError::UnknownBuffer(id))
    }

    /// Registration index of `id` (its tab position).
    #[must_use]
    pub fn position(&self, id: BufferId) -> Option<usize> {
        self.buffers.iter().position(|(bid, _)| *bid == id)
    }

    /// All buffers in registration order.
    pub fn all(&self) -> impl Iterator<Item = (BufferId, &Buffer)> {
        self.buffers.iter().map(|(id, b)| (*id, b))
    }

    /// All ids in registration order.
    #[must_use]
    pub fn ids(&self) -> Vec<BufferId> {
        self.buffers.iter().map(|(id, _)| *id).collect()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    /// The file name of buffer `id`, or `Untitled`.
    ///
    /// # Errors
    ///
    /// [`EditorError::UnknownBuffer`] if `id` is not registered.
    pub fn display_name(&self, id: BufferId) -> Result<String> {
        self.get(id).map(Buffer::display_name)
    }

    // -- Recent files -------------------------------------------------------

    /// The recent-files history, most recent first.
    #[inline]
    #[must_use]
    pub const fn recent_files(&self) -> &RecentFiles {
        &self.recent
    }

    /// Apply a changed configuration to the registry.
    pub fn apply_config(&mut self, config: &EditorConfig) {
        self.recent.set_capacity(config.recent_capacity);
        self.tabstop = config.tabstop;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    fn write(dir: &Path, name: &str, text: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, text).unwrap();
        path
    }

    fn recent(reg: &BufferRegistry) -> Vec<PathBuf> {
        reg.recent_files().iter().map(Path::to_path_buf).collect()
    }

    #[test]
    fn open_registers_and_records_recent() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "a.py", "x\n");
        let mut reg = BufferRegistry::new();
        let id = reg.open(&path).unwrap();
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get(id).unwrap().text(), "x\n");
        assert_eq!(recent(&reg), vec![path]);
    }

    #[test]
    fn open_missing_leaves_registry_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let mut reg = BufferRegistry::new();
        let err = reg.open(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, EditorError::Io { .. }));
        assert!(reg.is_empty());
        assert!(reg.recent_files().is_empty());
    }

    #[test]
    fn all_is_registration_order() {
        let mut reg = BufferRegistry::new();
        let a = reg.insert(Buffer::from_text("a"));
        let b = reg.new_untitled();
        let c = reg.insert(Buffer::from_text("c"));
        assert_eq!(reg.ids(), vec![a, b, c]);
        reg.close(b).unwrap();
        assert_eq!(reg.ids(), vec![a, c]);
        assert_eq!(reg.position(c), Some(1));
    }

    #[test]
    fn ids_are_not_reused() {
        let mut reg = BufferRegistry::new();
        let a = reg.new_untitled();
        reg.close(a).unwrap();
        let b = reg.new_untitled();
        assert_ne!(a, b);
        assert!(matches!(reg.get(a), Err(EditorError::UnknownBuffer(id)) if id == a));
    }

    #[test]
    fn close_unknown_fails() {
        let mut reg = BufferRegistry::new();
        let id = reg.new_untitled();
        reg.close(id).unwrap();
        assert!(matches!(reg.close(id), Err(EditorError::UnknownBuffer(_))));
    }

    #[test]
    fn six_opens_keep_five_recent() {
        let dir = tempfile::tempdir().unwrap();
        let mut reg = BufferRegistry::new();
        let paths: Vec<_> = (1..=6)
            .map(|n| write(dir.path(), &format!("f{n}.txt"), "x"))
            .collect();
        for p in &paths {
            reg.open(p).unwrap();
        }
        let expected: Vec<_> = paths.iter().rev().take(5).cloned().collect();
        assert_eq!(recent(&reg), expected);
    }

    #[test]
    fn reopen_moves_to_front() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.txt", "a");
        let b = write(dir.path(), "b.txt", "b");
        let mut reg = BufferRegistry::new();
        reg.open(&a).unwrap();
        reg.open(&b).unwrap();
        reg.open(&a).unwrap();
        assert_eq!(recent(&reg), vec![a, b]);
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn open_recent_reopens_entry() {
        let dir = tempfile::tempdir().unwrap();
        let a = write(dir.path(), "a.txt", "first");
        let b = write(dir.path(), "b.txt", "second");
        let mut reg = BufferRegistry::new();
        reg.open(&a).unwrap();
        reg.open(&b).unwrap();
        let id = reg.open_recent(1).unwrap();
        assert_eq!(reg.get(id).unwrap().text(), "first");
        assert_eq!(recent(&reg), vec![a, b]);
        assert!(matches!(
            reg.open_recent(7),
            Err(EditorError::NoRecentFile(7))
        ));
    }

    #[test]
    fn save_untitled_needs_target() {
        let dir = tempfile::tempdir().unwrap();
        let mut reg = BufferRegistry::new();
        let id = reg.new_untitled();
        reg.get_mut(id).unwrap().insert(0, "body").unwrap();
        assert!(matches!(reg.save(id, None), Err(EditorError::NoTargetPath)));
        assert!(reg.get(id).unwrap().is_dirty());

        let target = dir.path().join("new.txt");
        assert_eq!(reg.save(id, Some(&target)).unwrap(), target);
        assert!(!reg.get(id).unwrap().is_dirty());
        assert_eq!(reg.display_name(id).unwrap(), "new.txt");
        // Save-as does not count as opening.
        assert!(reg.recent_files().is_empty());
    }

    #[test]
    fn save_writes_own_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "s.txt", "old");
        let mut reg = BufferRegistry::new();
        let id = reg.open(&path).unwrap();
        reg.get_mut(id).unwrap().set_text("new");
        reg.save(id, None).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn reload_through_registry() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "r.txt", "one");
        let mut reg = BufferRegistry::new();
        let id = reg.open(&path).unwrap();
        reg.get_mut(id).unwrap().set_text("changed");
        reg.reload(id).unwrap();
        assert_eq!(reg.get(id).unwrap().text(), "one");
    }

    #[test]
    fn config_sets_recent_capacity() {
        let config = EditorConfig {
            recent_capacity: 2,
            ..EditorConfig::default()
        };
        let mut reg = BufferRegistry::with_config(&config);
        assert_eq!(reg.recent_files().capacity(), 2);
        reg.apply_config(&EditorConfig::default());
        assert_eq!(reg.recent_files().capacity(), 5);
    }

    #[test]
    fn tab_inserts_configured_width() {
        let mut reg = BufferRegistry::new();
        let id = reg.insert(Buffer::from_text("x"));
        assert_eq!(reg.insert_indent(id, 0).unwrap(), 4);
        assert_eq!(reg.get(id).unwrap().text(), "    x");

        let mut config = EditorConfig::default();
        for d in crate::options::parse_directives("ts=2") {
            config.apply(&d).unwrap();
        }
        let mut reg = BufferRegistry::with_config(&config);
        let id = reg.insert(Buffer::from_text("x\ny"));
        assert_eq!(reg.insert_indent(id, 2).unwrap(), 4);
        assert_eq!(reg.get(id).unwrap().text(), "x\n  y");
        assert!(reg.get(id).unwrap().is_dirty());

        reg.apply_config(&EditorConfig::default());
        assert_eq!(reg.tabstop(), 4);
    }

    #[test]
    fn tab_past_end_fails() {
        let mut reg = BufferRegistry::new();
        let id = reg.insert(Buffer::from_text("ab"));
        assert!(matches!(
            reg.insert_indent(id, 3),
            Err(EditorError::OffsetOutOfRange { offset: 3, len: 2 })
        ));
        assert_eq!(reg.get(id).unwrap().text(), "ab");
    }
}
