//! # quill-syntax: Lexical highlighting for quill
//!
//! Line-at-a-time classification into a small fixed set of categories:
//!
//! - **[`token`]**: `Category` and `Token` (char-based spans)
//! - **[`rule`]**: `HighlightRule` and the ordered `RuleSet`
//! - **[`language`]**: language detection from file extensions
//! - **[`tokenizer`]**: `Tokenizer::classify`, the per-line entry point
//! - **[`completion`]**: keyword completion for the word before the cursor
//!
//! ```text
//! path ──► Language ──► RuleSet ──► Tokenizer
//!                                      │
//!                         line ──► classify ──► [Token]
//! ```

pub mod completion;
pub mod error;
pub mod language;
pub mod rule;
pub mod token;
pub mod tokenizer;

pub use error::RuleError;
pub use language::Language;
pub use rule::{HighlightRule, RuleSet};
pub use token::{Category, Token};
pub use tokenizer::Tokenizer;
