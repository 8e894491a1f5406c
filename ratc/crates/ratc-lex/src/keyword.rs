//! Keyword classification.
//!
//! The lexer never emits keywords. This pass re-tags IDENTIFIER tokens whose
//! lexeme is in a configurable [`KeywordSet`]; every other token keeps its kind.

use std::fmt;

use rustc_hash::FxHashSet;

use crate::token::{Token, TokenKind};

/// Keywords of the Rat21F language.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "import", "integer", "if", "else", "endif", "while", "for", "print", "cmath", "or", "in",
    "True", "False", "with", "except", "break", "def", "try", "return", "get", "put", "raise",
    "class", "super", "from", "self",
];

/// Report category of a token after keyword classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// An identifier whose lexeme is a keyword.
    Keyword,
    /// Any other token, under its lexer kind.
    Kind(TokenKind),
}

impl Category {
    /// The upper-case label used in token reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::Keyword => "KEYWORD",
            Self::Kind(kind) => kind.name(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A case-sensitive set of keyword lexemes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    words: FxHashSet<String>,
}

impl KeywordSet {
    /// Creates a set from the given words.
    ///
    /// # Example
    ///
    /// ```
    /// use ratc_lex::KeywordSet;
    ///
    /// let keywords = KeywordSet::new(["let", "fn"]);
    /// assert!(keywords.contains("let"));
    /// assert!(!keywords.contains("while"));
    /// ```
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if `lexeme` is a keyword.
    pub fn contains(&self, lexeme: &str) -> bool {
        self.words.contains(lexeme)
    }

    /// Number of keywords in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the set has no keywords.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Classifies one token.
    ///
    /// Only identifiers are ever re-tagged: a STRING whose content looks like
    /// a keyword stays a STRING.
    pub fn classify(&self, token: &Token<'_>) -> Category {
        if token.kind == TokenKind::Identifier && self.contains(token.lexeme) {
            Category::Keyword
        } else {
            Category::Kind(token.kind)
        }
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS.iter().copied())
    }
}
