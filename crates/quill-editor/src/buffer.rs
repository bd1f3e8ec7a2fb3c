//! Text buffer: one open document.
//!
//! A `Buffer` wraps a [`ropey::Rope`] with the editing operations the host
//! widget forwards, file I/O, and metadata (path, dirty flag). Its
//! [`LineIndex`] is rebuilt after every mutation, so line lookups are always
//! consistent with the text.
//!
//! # Design choices
//!
//! - **Offsets are char offsets**, not byte offsets, matching ropey's native
//!   indexing. Byte offsets never leak into the public API.
//!
//! - **Dirty means "differs from disk".** The buffer keeps the rope it last
//!   loaded or saved (a cheap structural clone) and compares against it after
//!   each edit. Typing a char and deleting it again leaves the buffer clean.
//!
//! - **Text is written verbatim.** Line endings are whatever the text holds;
//!   no normalisation happens on load or save.
//!
//! - **No undo/redo here.** The host widget owns edit history.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use ropey::Rope;

use crate::error::{EditorError, Result};
use crate::line_index::LineIndex;
use crate::location::Span;

/// Label used for buffers with no file path.
pub const UNTITLED: &str = "Untitled";

// ---------------------------------------------------------------------------
// TextStats
// ---------------------------------------------------------------------------

/// Word and char counts for a buffer, as shown by the word-count command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TextStats {
    /// Whitespace-separated words.
    pub words: usize,
    /// Unicode scalar values, line breaks included.
    pub chars: usize,
    pub lines: usize,
}

// ---------------------------------------------------------------------------
// Buffer
// ---------------------------------------------------------------------------

/// A text buffer backed by a rope.
pub struct Buffer {
    rope: Rope,
    /// Content as last loaded from or saved to disk.
    saved: Rope,
    path: Option<PathBuf>,
    dirty: bool,
    index: LineIndex,
}

impl Buffer {
    // -- Construction -------------------------------------------------------

    /// Create an empty, clean buffer with no file path.
    #[must_use]
    pub fn new() -> Self {
        Self::from_text("")
    }

    /// Create a clean buffer from a string. The string counts as the saved
    /// content.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let rope = Rope::from_str(text);
        Self {
            index: LineIndex::from_rope(&rope),
            saved: rope.clone(),
            rope,
            path: None,
            dirty: false,
        }
    }

    /// Load a buffer from a file.
    ///
    /// # Errors
    ///
    /// [`EditorError::Io`] if the file cannot be read or is not valid UTF-8.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| EditorError::io(path, e))?;
        let mut buf = Self::from_text(&text);
        buf.path = Some(path.to_path_buf());
        Ok(buf)
    }

    // -- Text access --------------------------------------------------------

    /// The underlying rope.
    #[inline]
    #[must_use]
    pub const fn rope(&self) -> &Rope {
        &self.rope
    }

    /// Collect the text into a `String`. Allocates.
    #[must_use]
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// The line index for the current text.
    #[inline]
    #[must_use]
    pub const fn line_index(&self) -> &LineIndex {
        &self.index
    }

    /// Number of lines. An empty buffer has 1 line; a buffer ending with
    /// `\n` has a trailing empty line.
    #[inline]
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.index.line_count()
    }

    #[inline]
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// The text of 1-based line `line`, without its `\n` or a `\r` before it.
    ///
    /// # Errors
    ///
    /// [`EditorError::LineOutOfRange`] for a line outside the buffer.
    pub fn line_text(&self, line: usize) -> Result<String> {
        let span = self.index.line_span(line)?;
        let mut text: String = self.rope.slice(span.start..span.end).chars().collect();
        if text.ends_with('\r') {
            text.pop();
        }
        Ok(text)
    }

    /// Every line's text, in order, as [`line_text`](Self::line_text) would
    /// return it.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        (1..=self.line_count())
            .filter_map(|line| self.line_text(line).ok())
            .collect()
    }

    /// Word, char, and line counts.
    #[must_use]
    pub fn stats(&self) -> TextStats {
        let words = self
            .rope
            .chunks()
            .fold((0, false), |(count, in_word), chunk| {
                chunk.chars().fold((count, in_word), |(count, in_word), ch| {
                    if ch.is_whitespace() {
                        (count, false)
                    } else if in_word {
                        (count, true)
                    } else {
                        (count + 1, true)
                    }
                })
            })
            .0;
        TextStats {
            words,
            chars: self.rope.len_chars(),
            lines: self.line_count(),
        }
    }

    // -- Editing ------------------------------------------------------------

    /// Replace the whole text.
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.after_edit();
    }

    /// Remove all text (the "clear all" command).
    pub fn clear(&mut self) {
        self.set_text("");
    }

    /// Insert `text` at char `offset`.
    ///
    /// # Errors
    ///
    /// [`EditorError::OffsetOutOfRange`] if `offset > len_chars()`.
    pub fn insert(&mut self, offset: usize, text: &str) -> Result<()> {
        self.check_offset(offset)?;
        self.rope.insert(offset, text);
        self.after_edit();
        Ok(())
    }

    /// Insert `width` spaces at `offset` (the Tab key). Returns the offset
    /// just after the inserted indent.
    ///
    /// # Errors
    ///
    /// [`EditorError::OffsetOutOfRange`] if `offset > len_chars()`.
    pub fn insert_indent(&mut self, offset: usize, width: usize) -> Result<usize> {
        self.insert(offset, &" ".repeat(width))?;
        Ok(offset + width)
    }

    /// Delete the chars in `span`. An empty span is a no-op. A reversed
    /// span (a selection made right to left) is taken in order.
    ///
    /// # Errors
    ///
    /// [`EditorError::OffsetOutOfRange`] if the span reaches past
    /// `len_chars()`.
    pub fn remove(&mut self, span: Span) -> Result<()> {
        let span = self.check_span(span)?;
        if span.is_empty() {
            return Ok(());
        }
        self.rope.remove(span.start..span.end);
        self.after_edit();
        Ok(())
    }

    /// Replace the chars in `span` (taken in order) with `text`.
    ///
    /// # Errors
    ///
    /// [`EditorError::OffsetOutOfRange`] if the span reaches past
    /// `len_chars()`.
    pub fn replace_range(&mut self, span: Span, text: &str) -> Result<()> {
        let span = self.check_span(span)?;
        self.rope.remove(span.start..span.end);
        self.rope.insert(span.start, text);
        self.after_edit();
        Ok(())
    }

    /// Upper-case the selection `span`. Returns the span of the replaced
    /// text, which can be longer than the input (`ß` becomes `SS`).
    ///
    /// # Errors
    ///
    /// [`EditorError::OffsetOutOfRange`] if `span.end > len_chars()`.
    pub fn uppercase_range(&mut self, span: Span) -> Result<Span> {
        self.map_range(span, |s| s.to_uppercase())
    }

    /// Lower-case the selection `span`. Returns the span of the replaced text.
    ///
    /// # Errors
    ///
    /// [`EditorError::OffsetOutOfRange`] if `span.end > len_chars()`.
    pub fn lowercase_range(&mut self, span: Span) -> Result<Span> {
        self.map_range(span, |s| s.to_lowercase())
    }

    /// Replace every non-overlapping occurrence of `search` with
    /// `replacement`, scanning left to right. Returns the number replaced.
    ///
    /// # Errors
    ///
    /// [`EditorError::EmptyPattern`] if `search` is empty.
    pub fn replace_all(&mut self, search: &str, replacement: &str) -> Result<usize> {
        if search.is_empty() {
            return Err(EditorError::EmptyPattern);
        }
        let text = self.text();
        let count = text.matches(search).count();
        if count > 0 {
            self.set_text(&text.replace(search, replacement));
        }
        Ok(count)
    }

    fn map_range(&mut self, span: Span, f: impl FnOnce(&str) -> String) -> Result<Span> {
        let span = self.check_span(span)?;
        let original: String = self.rope.slice(span.start..span.end).chars().collect();
        let mapped = f(&original);
        let mapped_len = mapped.chars().count();
        self.replace_range(span, &mapped)?;
        Ok(Span::new(span.start, span.start + mapped_len))
    }

    fn check_offset(&self, offset: usize) -> Result<()> {
        let len = self.rope.len_chars();
        if offset > len {
            return Err(EditorError::OffsetOutOfRange { offset, len });
        }
        Ok(())
    }

    fn check_span(&self, span: Span) -> Result<Span> {
        let span = Span::ordered(span.start, span.end);
        self.check_offset(span.end)?;
        Ok(span)
    }

    fn after_edit(&mut self) {
        self.index = LineIndex::from_rope(&self.rope);
        self.dirty = self.rope != self.saved;
    }

    // -- Metadata -----------------------------------------------------------

    /// The file path this buffer is associated with, if any.
    #[inline]
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// True when the text differs from what was last loaded or saved.
    #[inline]
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The bare file name, or [`UNTITLED`].
    #[must_use]
    pub fn display_name(&self) -> String {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .map_or_else(|| UNTITLED.to_owned(), |n| n.to_string_lossy().into_owned())
    }

    /// The tab title: the display name, prefixed with `*` when dirty.
    #[must_use]
    pub fn tab_label(&self) -> String {
        let name = self.display_name();
        if self.dirty { format!("*{name}") } else { name }
    }

    // -- File I/O -----------------------------------------------------------

    /// Write the text verbatim to `target`, or to the buffer's own path when
    /// `target` is `None`. On success the buffer adopts `target` as its path
    /// and becomes clean.
    ///
    /// # Errors
    ///
    /// [`EditorError::NoTargetPath`] when there is nowhere to write, and
    /// [`EditorError::Io`] if the write fails (the buffer is unchanged).
    pub fn save(&mut self, target: Option<&Path>) -> Result<PathBuf> {
        let path = target
            .or(self.path.as_deref())
            .ok_or(EditorError::NoTargetPath)?
            .to_path_buf();
        let file = fs::File::create(&path).map_err(|e| EditorError::io(&path, e))?;
        self.rope
            .write_to(file)
            .map_err(|e| EditorError::io(&path, e))?;
        self.saved = self.rope.clone();
        self.dirty = false;
        self.path = Some(path.clone());
        Ok(path)
    }

    /// Re-read the buffer's file, discarding in-memory changes.
    ///
    /// # Errors
    ///
    /// [`EditorError::NoTargetPath`] for a pathless buffer, and
    /// [`EditorError::Io`] if the file is gone or unreadable (the buffer is
    /// unchanged).
    pub fn reload(&mut self) -> Result<()> {
        let path = self.path.as_deref().ok_or(EditorError::NoTargetPath)?;
        let text = fs::read_to_string(path).map_err(|e| EditorError::io(path, e))?;
        self.rope = Rope::from_str(&text);
        self.saved = self.rope.clone();
        self.index = LineIndex::from_rope(&self.rope);
        self.dirty = false;
        Ok(())
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("lines", &self.line_count())
            .field("chars", &self.len_chars())
            .field("dirty", &self.dirty)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
