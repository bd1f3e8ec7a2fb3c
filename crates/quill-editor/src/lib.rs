//! # quill-editor: text-buffer services for quill
//!
//! The in-memory core behind the editor window:
//!
//! - **[`location`]**: `Location` (1-based line, char column) and `Span`
//! - **[`line_index`]**: line-start table with line ↔ offset conversion
//! - **[`buffer`]**: `Buffer` wrapping a rope with editing, file I/O, and the dirty flag
//! - **[`recent`]**: most-recently-opened file paths
//! - **[`registry`]**: `BufferRegistry`, the set of open buffers
//! - **[`search`]**: keyword search over one or all buffers, and replace-all
//! - **[`navigation`]**: goto-line and search-result targets, current line, gutter width
//! - **[`config`]** / **[`options`]**: editor settings and option directives (`ts=2`, `nosyntax`)
//!
//! Syntax classification lives in the `quill-syntax` crate; rendering and
//! widgets belong to the host.

pub mod buffer;
pub mod config;
pub mod error;
pub mod line_index;
pub mod location;
pub mod navigation;
pub mod options;
pub mod recent;
pub mod registry;
pub mod search;

pub use buffer::{Buffer, TextStats};
pub use config::EditorConfig;
pub use error::{EditorError, Result};
pub use line_index::LineIndex;
pub use location::{Location, Span};
pub use navigation::Target;
pub use recent::RecentFiles;
pub use registry::{BufferId, BufferRegistry};
pub use search::{SearchResult, SearchScope};
