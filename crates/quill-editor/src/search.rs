//! Search: keyword search across open buffers.
//!
//! Literal, case-sensitive substring search over one buffer or every buffer
//! in a [`BufferRegistry`], plus whole-buffer replace.
//!
//! # Results
//!
//! [`find_all`] reports at most one [`SearchResult`] per matching line: the
//! column of the first occurrence. Results are ordered by buffer
//! registration order, then by ascending line number. The registry is
//! borrowed for the whole scan, so the results describe a single snapshot.
//!
//! Results are plain values. They do not keep a buffer alive; resolving one
//! after its buffer closed fails in [`navigation`](crate::navigation).

use tracing::{debug, info};

use crate::buffer::Buffer;
use crate::error::{EditorError, Result};
use crate::registry::{BufferId, BufferRegistry};

// ---------------------------------------------------------------------------
// Scope
// ---------------------------------------------------------------------------

/// Which buffers a search covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchScope {
    /// A single buffer.
    Buffer(BufferId),
    /// Every registered buffer, in registration order.
    All,
}

// ---------------------------------------------------------------------------
// SearchResult
// ---------------------------------------------------------------------------

/// One matching line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    pub buffer: BufferId,
    /// 1-based line number.
    pub line: usize,
    /// Char column of the first occurrence on the line.
    pub column: usize,
    /// The whole line, without its terminator.
    pub line_text: String,
}

impl SearchResult {
    /// The entry shown in a result list: `name: line N: text`, with the line
    /// text trimmed.
    #[must_use]
    pub fn label(&self, name: &str) -> String {
        format!("{name}: line {}: {}", self.line, self.line_text.trim())
    }
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Find every line containing `keyword` within `scope`.
///
/// An empty keyword matches nothing.
///
/// # Errors
///
/// [`EditorError::UnknownBuffer`] if a single-buffer scope names a buffer
/// that is not registered.
pub fn find_all(
    registry: &BufferRegistry,
    keyword: &str,
    scope: SearchScope,
) -> Result<Vec<SearchResult>> {
    let mut results = Vec::new();
    match scope {
        SearchScope::Buffer(id) => {
            let buffer = registry.get(id)?;
            scan_buffer(id, buffer, keyword, &mut results);
        }
        SearchScope::All => {
            for (id, buffer) in registry.all() {
                scan_buffer(id, buffer, keyword, &mut results);
            }
        }
    }
    debug!(keyword, matches = results.len(), "find_all");
    Ok(results)
}

/// Replace every non-overlapping occurrence of `search` in buffer `id`.
/// Returns the number of replacements.
///
/// # Errors
///
/// [`EditorError::EmptyPattern`] when `search` is empty, or
/// [`EditorError::UnknownBuffer`].
pub fn replace_all(
    registry: &mut BufferRegistry,
    id: BufferId,
    search: &str,
    replacement: &str,
) -> Result<usize> {
    if search.is_empty() {
        return Err(EditorError::EmptyPattern);
    }
    let count = registry.get_mut(id)?.replace_all(search, replacement)?;
    info!(%id, search, replacement, count, "replace_all");
    Ok(count)
}

fn scan_buffer(id: BufferId, buffer: &Buffer, keyword: &str, out: &mut Vec<SearchResult>) {
    if keyword.is_empty() {
        return;
    }
    for (idx, line_text) in buffer.lines().into_iter().enumerate() {
        let Some(byte_idx) = line_text.find(keyword) else {
            continue;
        };
        let column = line_text[..byte_idx].chars().count();
        out.push(SearchResult {
            buffer: id,
            line: idx + 1,
            column,
            line_text,
        });
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
