//! Token type definitions.

use std::fmt;

/// Classification of a lexeme.
///
/// Keywords are not a kind of their own: the engine emits every word as
/// [`TokenKind::Identifier`] and a later pass re-tags them (see
/// [`crate::keyword`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `[a-zA-Z][a-zA-Z0-9_]*`
    Identifier,
    /// One or more decimal digits.
    Integer,
    /// Digits, a `.`, then zero or more digits.
    Real,
    /// A quoted literal, quotes and escapes included verbatim.
    String,
    /// One- or two-character operator.
    Operator,
    /// One bracket, `,` or `;`.
    Separator,
    /// `#` through the end of the line, newline excluded.
    Comment,
    /// One closed indentation level, emitted at shutdown.
    Dedent,
    /// Sentinel; nothing follows it.
    End,
}

impl TokenKind {
    /// The upper-case label used in token reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::Identifier => "IDENTIFIER",
            Self::Integer => "INTEGER",
            Self::Real => "REAL",
            Self::String => "STRING",
            Self::Operator => "OPERATOR",
            Self::Separator => "SEPARATOR",
            Self::Comment => "COMMENT",
            Self::Dedent => "DEDENT",
            Self::End => "END",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexeme borrowed from the input buffer.
///
/// Tokens are never mutated after emission. `line` is the scanner's line at
/// the moment of emission, so a string literal spanning lines records the line
/// its closing quote sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    /// Token classification.
    pub kind: TokenKind,
    /// 1-based line number at emission.
    pub line: u32,
    /// Exact source text consumed for this token.
    pub lexeme: &'src str,
}

impl<'src> Token<'src> {
    /// Creates a new token.
    pub fn new(kind: TokenKind, line: u32, lexeme: &'src str) -> Self {
        Self { kind, line, lexeme }
    }

    /// Returns true for the END sentinel.
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::End
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {:?}", self.line, self.kind, self.lexeme)
    }
}
