//! Keyword completion.
//!
//! As the user types letters, the host asks for completions of the word
//! fragment before the cursor. Matching is a case-insensitive prefix test
//! against a fixed word list; candidates keep the list's order.

/// Words offered by the default completer.
pub const DEFAULT_WORDS: &[&str] = &[
    "def", "class", "import", "from", "return", "if", "else", "elif", "while", "for", "in", "try",
    "except",
];

/// A prefix completer over a fixed word list.
#[derive(Debug, Clone)]
pub struct Completer {
    words: Vec<String>,
}

impl Default for Completer {
    fn default() -> Self {
        Self::new(DEFAULT_WORDS.iter().copied())
    }
}

impl Completer {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Words starting with `prefix`, ignoring case. An empty prefix has no
    /// completions.
    #[must_use]
    pub fn complete(&self, prefix: &str) -> Vec<&str> {
        if prefix.is_empty() {
            return Vec::new();
        }
        let needle = prefix.to_lowercase();
        self.words
            .iter()
            .filter(|w| w.to_lowercase().starts_with(&needle))
            .map(String::as_str)
            .collect()
    }

    /// Completions for the word fragment that ends at char column `col`.
    #[must_use]
    pub fn complete_at(&self, line: &str, col: usize) -> Vec<&str> {
        self.complete(word_before(line, col))
    }
}

/// The run of word characters (alphanumeric or `_`) ending at char column
/// `col`. Columns past the end of the line are clamped.
#[must_use]
pub fn word_before(line: &str, col: usize) -> &str {
    let end = line
        .char_indices()
        .nth(col)
        .map_or(line.len(), |(b, _)| b);
    let head = &line[..end];
    let start = head
        .char_indices()
        .rev()
        .take_while(|&(_, ch)| ch.is_alphanumeric() || ch == '_')
        .last()
        .map_or(end, |(b, _)| b);
    &head[start..]
}
