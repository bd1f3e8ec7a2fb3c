//! Language detection from file paths.

use std::path::Path;

/// A language the highlighter knows how to classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    Python,
    /// No rules; every line is `Plain`.
    #[default]
    PlainText,
}

impl Language {
    /// Detect the language from a file extension.
    ///
    /// Unknown or missing extensions fall back to [`Language::PlainText`].
    #[must_use]
    pub fn detect(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("py" | "pyw" | "pyi") => Self::Python,
            _ => Self::PlainText,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::PlainText => "text",
        }
    }
}
