//! Error type for the editor core.
//!
//! Every fallible operation in this crate returns [`Result<T>`]. I/O errors
//! carry the path they concern so the host can show a useful message without
//! tracking which call failed.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::registry::BufferId;

/// Everything the editor core can fail with.
#[derive(Debug, Error)]
pub enum EditorError {
    /// A file could not be read or written. The buffer involved (if any) is
    /// left exactly as it was before the call.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A 1-based line number outside `1..=line_count`.
    #[error("line {line} is out of range (buffer has {line_count} lines)")]
    LineOutOfRange { line: usize, line_count: usize },

    /// A char offset past the end of the buffer.
    #[error("offset {offset} is out of range (buffer has {len} chars)")]
    OffsetOutOfRange { offset: usize, len: usize },

    /// Save or reload on a buffer with no file path, and none was supplied.
    #[error("buffer has no file path")]
    NoTargetPath,

    /// Replace was asked to search for the empty string.
    #[error("search pattern is empty")]
    EmptyPattern,

    /// The id does not name a registered buffer (never did, or was closed).
    #[error("no buffer with id {0}")]
    UnknownBuffer(BufferId),

    /// A recent-files index past the end of the list.
    #[error("no recent file at index {0}")]
    NoRecentFile(usize),
}

impl EditorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EditorError>;
