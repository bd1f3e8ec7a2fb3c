//! Per-line lexical classification.
//!
//! The [`Tokenizer`] runs its [`RuleSet`] over one line at a time and returns
//! a gap-free sequence of [`Token`]s. There is no state carried from one line
//! to the next, so a string or comment that spans lines is only recognised on
//! the lines where its pattern matches in full.
//!
//! # Claim order
//!
//! Rules run in list order. Every match of a rule claims the characters it
//! covers that no earlier rule has claimed; characters already owned keep
//! their category. After all rules run, unowned characters are `Plain` and
//! adjacent characters of the same category are merged into one token.

use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::language::Language;
use crate::rule::RuleSet;
use crate::token::{Category, Token};

/// Classifies lines of text with an ordered rule set.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    language: Language,
    rules: RuleSet,
}

impl Tokenizer {
    /// Build a tokenizer from a custom rule set.
    #[must_use]
    pub const fn new(rules: RuleSet) -> Self {
        Self {
            language: Language::PlainText,
            rules,
        }
    }

    /// The canonical tokenizer for `language`.
    ///
    /// # Errors
    ///
    /// Propagates rule compilation errors from the language's rule set.
    pub fn for_language(language: Language) -> Result<Self> {
        let rules = match language {
            Language::Python => RuleSet::python()?,
            Language::PlainText => RuleSet::empty(),
        };
        debug!(language = language.name(), rules = rules.len(), "tokenizer built");
        Ok(Self { language, rules })
    }

    /// The canonical tokenizer for the language detected from `path`.
    ///
    /// # Errors
    ///
    /// Propagates rule compilation errors from the language's rule set.
    pub fn for_path(path: &Path) -> Result<Self> {
        Self::for_language(Language::detect(path))
    }

    #[inline]
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    #[inline]
    #[must_use]
    pub const fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Classify a single line (without its line terminator).
    ///
    /// The returned tokens are ordered, never overlap, and together cover
    /// every char of `line`. An empty line yields no tokens.
    #[must_use]
    pub fn classify(&self, line: &str) -> Vec<Token> {
        if line.is_empty() {
            return Vec::new();
        }

        // Owner per byte. Matches start and end on char boundaries, so the
        // owner of a char's first byte is the owner of the whole char.
        let mut owner: Vec<Option<Category>> = vec![None; line.len()];
        for rule in &self.rules {
            for span in rule.byte_spans(line) {
                for slot in &mut owner[span] {
                    if slot.is_none() {
                        *slot = Some(rule.category());
                    }
                }
            }
        }

        let mut tokens: Vec<Token> = Vec::new();
        for (col, (byte, _)) in line.char_indices().enumerate() {
            let category = owner[byte].unwrap_or(Category::Plain);
            match tokens.last_mut() {
                Some(last) if last.category == category => last.len += 1,
                _ => tokens.push(Token::new(col, 1, category)),
            }
        }
        tokens
    }

    /// Classify every line of `text`, split on `\n`.
    ///
    /// A trailing `\r` on a line is treated as part of its terminator and is
    /// not classified. The result has one entry per line, so a text ending
    /// in `\n` yields a final empty entry.
    #[must_use]
    pub fn classify_text(&self, text: &str) -> Vec<Vec<Token>> {
        text.split('\n')
            .map(|line| self.classify(line.strip_suffix('\r').unwrap_or(line)))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
