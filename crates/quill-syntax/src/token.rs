//! Lexical categories and the token spans produced by the tokenizer.
//!
//! Columns and lengths count chars, not bytes, so a token can be mapped
//! straight onto a rendered line without re-walking its UTF-8 encoding.

use std::fmt;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// The lexical category of a span of text.
///
/// This is the whole vocabulary of the highlighter: there is no distinction
/// between identifiers, numbers, or operators. Anything not claimed by a rule
/// is `Plain`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Keyword,
    Comment,
    String,
    Plain,
}

impl Category {
    /// Short lowercase name, used by the CLI and in debug output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Comment => "comment",
            Self::String => "string",
            Self::Plain => "plain",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// A classified span of a single line: `[start, start + len)` in chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    pub start: usize,
    pub len: usize,
    pub category: Category,
}

impl Token {
    #[inline]
    #[must_use]
    pub const fn new(start: usize, len: usize, category: Category) -> Self {
        Self {
            start,
            len,
            category,
        }
    }

    /// Exclusive end column.
    #[inline]
    #[must_use]
    pub const fn end(self) -> usize {
        self.start + self.len
    }

    /// Extract the text this token covers from the line it was produced for.
    ///
    /// Returns an empty string if the token does not fit inside `line`
    /// (i.e. it was produced for a different line).
    #[must_use]
    pub fn text(self, line: &str) -> &str {
        let mut indices = line
            .char_indices()
            .map(|(b, _)| b)
            .chain(std::iter::once(line.len()));
        let Some(start) = indices.nth(self.start) else {
            return "";
        };
        if self.len == 0 {
            return "";
        }
        indices
            .nth(self.len - 1)
            .map_or("", |end| &line[start..end])
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}+{}", self.category, self.start, self.len)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_names() {
        assert_eq!(Category::Keyword.name(), "keyword");
        assert_eq!(Category::Comment.name(), "comment");
        assert_eq!(Category::String.name(), "string");
        assert_eq!(Category::Plain.name(), "plain");
    }

    #[test]
    fn token_end() {
        assert_eq!(Token::new(3, 4, Category::Plain).end(), 7);
    }

    #[test]
    fn token_text_ascii() {
        let line = "return x";
        assert_eq!(Token::new(0, 6, Category::Keyword).text(line), "return");
        assert_eq!(Token::new(6, 2, Category::Plain).text(line), " x");
    }

    #[test]
    fn token_text_multibyte() {
        let line = "x = '日本'";
        assert_eq!(Token::new(4, 4, Category::String).text(line), "'日本'");
    }

    #[test]
    fn token_text_out_of_bounds_is_empty() {
        assert_eq!(Token::new(10, 2, Category::Plain).text("short"), "");
        assert_eq!(Token::new(2, 9, Category::Plain).text("short"), "");
    }

    #[test]
    fn token_display() {
        assert_eq!(Token::new(1, 2, Category::String).to_string(), "string@1+2");
    }
}
