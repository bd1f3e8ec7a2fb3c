//! Navigation: turning line numbers and search results into cursor targets.
//!
//! Every function here is a pure query over a [`BufferRegistry`]: nothing
//! moves a cursor or touches buffer text. The host applies the returned
//! [`Target`] to whatever widget it drives.
//!
//! Requests are clamped rather than rejected. A line below 1 goes to line 1,
//! a line past the end goes to the last line, and a column past the end of
//! its line goes to the end of that line. Buffers can be edited between a
//! search and the jump to one of its results, so a stale line or column is
//! the normal case.

use crate::error::Result;
use crate::location::Location;
use crate::registry::{BufferId, BufferRegistry};
use crate::search::SearchResult;

/// Where a cursor should go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Target {
    pub buffer: BufferId,
    /// Char offset into the buffer text.
    pub offset: usize,
    pub location: Location,
}

/// Goto-line: the start of 1-based `line` in buffer `id`, clamped.
///
/// # Errors
///
/// [`EditorError::UnknownBuffer`](crate::error::EditorError::UnknownBuffer).
pub fn resolve_line(registry: &BufferRegistry, id: BufferId, line: usize) -> Result<Target> {
    resolve(registry, id, Location::new(line, 0))
}

/// The position of a search result in its buffer's current text.
///
/// # Errors
///
/// [`EditorError::UnknownBuffer`](crate::error::EditorError::UnknownBuffer)
/// if the buffer was closed since the search ran.
pub fn resolve_search_result(registry: &BufferRegistry, result: &SearchResult) -> Result<Target> {
    resolve(
        registry,
        result.buffer,
        Location::new(result.line, result.column),
    )
}

/// The 1-based line holding `cursor_offset`, for current-line highlighting.
/// Offsets past the end count as the last line.
///
/// # Errors
///
/// [`EditorError::UnknownBuffer`](crate::error::EditorError::UnknownBuffer).
pub fn current_line(registry: &BufferRegistry, id: BufferId, cursor_offset: usize) -> Result<usize> {
    Ok(registry.get(id)?.line_index().line_of_offset(cursor_offset))
}

/// Line and column of `offset`, as shown in a status bar.
///
/// # Errors
///
/// [`EditorError::UnknownBuffer`](crate::error::EditorError::UnknownBuffer).
pub fn cursor_location(registry: &BufferRegistry, id: BufferId, offset: usize) -> Result<Location> {
    Ok(registry.get(id)?.line_index().location_of_offset(offset))
}

/// Columns needed by the line-number area: the digits of the largest line
/// number plus one column of padding.
///
/// | Lines   | Digits | Width |
/// |---------|--------|-------|
/// | 1–9     | 1      | 2     |
/// | 10–99   | 2      | 3     |
/// | 100–999 | 3      | 4     |
#[must_use]
pub const fn gutter_width(line_count: usize) -> usize {
    // At least 1, so ilog10 doesn't panic on 0.
    let n = if line_count == 0 { 1 } else { line_count };
    n.ilog10() as usize + 2
}

fn resolve(registry: &BufferRegistry, id: BufferId, requested: Location) -> Result<Target> {
    let index = registry.get(id)?.line_index();
    let offset = index.clamped_offset(requested);
    Ok(Target {
        buffer: id,
        offset,
        location: index.location_of_offset(offset),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
