//! Highlight rules: ordered `(pattern, category)` pairs.
//!
//! A [`RuleSet`] is applied front to back by the tokenizer. Order is
//! precedence: once a rule has claimed a character, no later rule can
//! reclassify it.
//!
//! # The Python rule set
//!
//! | Order | Pattern              | Category  |
//! |-------|----------------------|-----------|
//! | 1     | `'.*'`               | `String`  |
//! | 2     | `".*"`               | `String`  |
//! | 3     | `#.*`                | `Comment` |
//! | 4     | `\b(?:def\|class…)\b` | `Keyword` |
//!
//! Strings outrank comments, so a `#` inside a quoted literal stays part of
//! the string, and both outrank keywords. String patterns are greedy and know
//! nothing about escapes: `"a\"b"` is one string, and so is `"a" + "b"`.

use regex::Regex;

use crate::error::{Result, RuleError};
use crate::token::Category;

/// Python keywords recognised by the canonical rule set.
pub const PYTHON_KEYWORDS: &[&str] = &[
    "def", "class", "if", "elif", "else", "try", "except", "finally", "while", "for", "in",
    "import", "from", "as", "return", "with", "pass", "break", "continue", "and", "or", "not",
    "is", "lambda", "True", "False", "None",
];

// ---------------------------------------------------------------------------
// HighlightRule
// ---------------------------------------------------------------------------

/// One compiled pattern and the category it assigns.
#[derive(Debug, Clone)]
pub struct HighlightRule {
    regex: Regex,
    category: Category,
}

impl HighlightRule {
    /// Compile a rule.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvalidPattern`] if `pattern` does not compile and
    /// [`RuleError::EmptyMatch`] if it accepts the empty string.
    pub fn new(pattern: &str, category: Category) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
            pattern: pattern.to_owned(),
            source,
        })?;
        if regex.is_match("") {
            return Err(RuleError::EmptyMatch(pattern.to_owned()));
        }
        Ok(Self { regex, category })
    }

    /// A rule matching any of `words` as whole words.
    ///
    /// Words are escaped, so punctuation in them is matched literally.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::EmptyMatch`] when `words` is empty or only holds
    /// empty strings.
    pub fn words(words: &[&str], category: Category) -> Result<Self> {
        let alternation = words
            .iter()
            .filter(|w| !w.is_empty())
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|");
        if alternation.is_empty() {
            return Err(RuleError::EmptyMatch(String::new()));
        }
        Self::new(&format!(r"\b(?:{alternation})\b"), category)
    }

    #[inline]
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// The source pattern.
    #[inline]
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Non-overlapping leftmost-first matches in `line`, as byte ranges.
    pub(crate) fn byte_spans<'a>(
        &'a self,
        line: &'a str,
    ) -> impl Iterator<Item = std::ops::Range<usize>> + 'a {
        self.regex.find_iter(line).map(|m| m.range())
    }
}

// ---------------------------------------------------------------------------
// RuleSet
// ---------------------------------------------------------------------------

/// An ordered list of highlight rules. Earlier rules win.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<HighlightRule>,
}

impl RuleSet {
    /// A rule set with no rules: every line classifies as `Plain`.
    #[must_use]
    pub const fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// The canonical Python rule set (see the module docs for its order).
    ///
    /// # Errors
    ///
    /// Propagates [`RuleError`] from rule compilation.
    pub fn python() -> Result<Self> {
        let mut set = Self::empty();
        set.push(HighlightRule::new("'.*'", Category::String)?);
        set.push(HighlightRule::new(r#"".*""#, Category::String)?);
        set.push(HighlightRule::new("#.*", Category::Comment)?);
        set.push(HighlightRule::words(PYTHON_KEYWORDS, Category::Keyword)?);
        Ok(set)
    }

    /// Append a rule at the lowest precedence.
    pub fn push(&mut self, rule: HighlightRule) {
        self.rules.push(rule);
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules in precedence order.
    pub fn iter(&self) -> std::slice::Iter<'_, HighlightRule> {
        self.rules.iter()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a HighlightRule;
    type IntoIter = std::slice::Iter<'a, HighlightRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_compiles() {
        let rule = HighlightRule::new("#.*", Category::Comment).unwrap();
        assert_eq!(rule.category(), Category::Comment);
        assert_eq!(rule.pattern(), "#.*");
    }

    #[test]
    fn invalid_pattern_is_construction_error() {
        let err = HighlightRule::new("(unclosed", Category::String).unwrap_err();
        assert!(matches!(err, RuleError::InvalidPattern { .. }));
        assert!(err.to_string().contains("(unclosed"));
    }

    #[test]
    fn empty_matching_pattern_rejected() {
        let err = HighlightRule::new("x*", Category::Plain).unwrap_err();
        assert!(matches!(err, RuleError::EmptyMatch(_)));
    }

    #[test]
    fn words_rule_matches_whole_words_only() {
        let rule = HighlightRule::words(&["in", "is"], Category::Keyword).unwrap();
        let spans: Vec<_> = rule.byte_spans("x in inside is").collect();
        assert_eq!(spans, vec![2..4, 12..14]);
    }

    #[test]
    fn words_rule_escapes_punctuation() {
        let rule = HighlightRule::words(&["a.b"], Category::Keyword).unwrap();
        assert_eq!(rule.byte_spans("axb").count(), 0);
        assert_eq!(rule.byte_spans("a.b").count(), 1);
    }

    #[test]
    fn words_rule_needs_words() {
        assert!(HighlightRule::words(&[], Category::Keyword).is_err());
        assert!(HighlightRule::words(&[""], Category::Keyword).is_err());
    }

    #[test]
    fn python_set_order() {
        let set = RuleSet::python().unwrap();
        let cats: Vec<_> = set.iter().map(HighlightRule::category).collect();
        assert_eq!(
            cats,
            vec![
                Category::String,
                Category::String,
                Category::Comment,
                Category::Keyword
            ]
        );
    }

    #[test]
    fn empty_set() {
        let set = RuleSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }
}
