//! Line index: line-start offsets for a buffer's text.
//!
//! A [`LineIndex`] is derived data: it is rebuilt from scratch whenever the
//! text changes and never stored anywhere. Only `\n` ends a line, so the
//! line count is always the number of `\n` chars plus one. A `\r` before the
//! `\n` belongs to the line's content as far as the index is concerned;
//! consumers that display lines strip it themselves.
//!
//! # Coordinates
//!
//! Line numbers are 1-based. Offsets are 0-based char offsets into the whole
//! text. Lookups by line number are strict and fail with
//! [`EditorError::LineOutOfRange`]; lookups by offset clamp, because cursor
//! offsets handed in by the host can be stale after an edit.

use ropey::Rope;

use crate::error::{EditorError, Result};
use crate::location::{Location, Span};

/// Line-start offsets for one text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineIndex {
    /// Char offset of the first char of each line. Always starts with 0 and
    /// is strictly increasing.
    starts: Vec<usize>,
    /// Total char count of the text.
    len: usize,
}

impl LineIndex {
    /// Index a string.
    #[must_use]
    pub fn build(text: &str) -> Self {
        Self::from_chars(text.chars())
    }

    /// Index a rope without collecting it into a `String` first.
    #[must_use]
    pub fn from_rope(rope: &Rope) -> Self {
        Self::from_chars(rope.chars())
    }

    fn from_chars(chars: impl Iterator<Item = char>) -> Self {
        let mut starts = vec![0];
        let mut len = 0;
        for ch in chars {
            len += 1;
            if ch == '\n' {
                starts.push(len);
            }
        }
        Self { starts, len }
    }

    /// Number of lines. Never zero: empty text has one empty line.
    #[inline]
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.starts.len()
    }

    /// Total char count of the indexed text.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Offset of the first char of 1-based line `line`.
    ///
    /// # Errors
    ///
    /// [`EditorError::LineOutOfRange`] when `line` is 0 or past the last line.
    pub fn offset_of_line(&self, line: usize) -> Result<usize> {
        self.check_line(line)?;
        Ok(self.starts[line - 1])
    }

    /// The content of 1-based line `line`, excluding its `\n`.
    ///
    /// # Errors
    ///
    /// [`EditorError::LineOutOfRange`] when `line` is 0 or past the last line.
    pub fn line_span(&self, line: usize) -> Result<Span> {
        self.check_line(line)?;
        let start = self.starts[line - 1];
        let end = self
            .starts
            .get(line)
            .map_or(self.len, |next_start| next_start - 1);
        Ok(Span::new(start, end))
    }

    /// The 1-based line containing `offset`.
    ///
    /// Offsets past the end of the text resolve to the last line. An offset
    /// pointing at a `\n` belongs to the line that `\n` terminates.
    #[must_use]
    pub fn line_of_offset(&self, offset: usize) -> usize {
        let offset = offset.min(self.len);
        match self.starts.binary_search(&offset) {
            Ok(idx) => idx + 1,
            // `starts[0] == 0`, so an insertion point is always >= 1.
            Err(idx) => idx,
        }
    }

    /// The location of `offset`, clamped to the end of the text.
    #[must_use]
    pub fn location_of_offset(&self, offset: usize) -> Location {
        let offset = offset.min(self.len);
        let line = self.line_of_offset(offset);
        Location::new(line, offset - self.starts[line - 1])
    }

    /// The offset of a location after clamping it into the text: the line to
    /// `1..=line_count`, the column to the length of that line.
    #[must_use]
    pub fn clamped_offset(&self, loc: Location) -> usize {
        let line = loc.line.clamp(1, self.line_count());
        let start = self.starts[line - 1];
        let end = self
            .starts
            .get(line)
            .map_or(self.len, |next_start| next_start - 1);
        (start + loc.column).min(end)
    }

    fn check_line(&self, line: usize) -> Result<()> {
        if line == 0 || line > self.line_count() {
            return Err(EditorError::LineOutOfRange {
                line,
                line_count: self.line_count(),
            });
        }
        Ok(())
    }
}

impl Default for LineIndex {
    fn default() -> Self {
        Self::build("")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
