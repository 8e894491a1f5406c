//! Scan cursor for traversing source text.
//!
//! This module provides the `Cursor` struct which owns the lexer's private
//! scan state: where the current token started, where the next character
//! sits, and which line the scanner is on.

/// The lexer's scan position over a source buffer.
///
/// `start` marks the first unconsumed byte of the token in progress and
/// `position` the next byte to inspect. The cursor keeps
/// `start <= position <= source.len()` at all times; reading past the end
/// yields `None` rather than an error.
///
/// # Example
///
/// ```
/// use ratc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("let x");
/// assert_eq!(cursor.peek(), Some('l'));
/// cursor.eat_while(|c| c.is_ascii_alphabetic());
/// assert_eq!(cursor.lexeme(), "let");
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    /// The source text being traversed.
    source: &'src str,

    /// Byte offset of the first character of the current token.
    start: usize,

    /// Byte offset of the next character to inspect.
    position: usize,

    /// Current line number (1-based).
    line: u32,
}

impl<'src> Cursor<'src> {
    /// Creates a new cursor at the start of `source`, on line 1.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            start: 0,
            position: 0,
            line: 1,
        }
    }

    /// Returns the next character without consuming it.
    ///
    /// `None` means the input is exhausted.
    ///
    /// # Example
    ///
    /// ```
    /// use ratc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("");
    /// assert_eq!(cursor.peek(), None);
    /// ```
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.peek_nth(0)
    }

    /// Returns the character `n` characters past the current one.
    ///
    /// # Example
    ///
    /// ```
    /// use ratc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("ab");
    /// assert_eq!(cursor.peek_nth(1), Some('b'));
    /// assert_eq!(cursor.peek_nth(2), None);
    /// ```
    #[inline]
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        let rest = self.source.get(self.position..)?;

        // Fast path for ASCII (most common case)
        if n == 0 {
            if let Some(&b) = rest.as_bytes().first() {
                if b < 128 {
                    return Some(b as char);
                }
            }
        }

        rest.chars().nth(n)
    }

    /// Consumes one character and returns it.
    ///
    /// Increments the line counter when the character is a newline.
    ///
    /// # Example
    ///
    /// ```
    /// use ratc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("\nx");
    /// assert_eq!(cursor.bump(), Some('\n'));
    /// assert_eq!(cursor.line(), 2);
    /// ```
    #[inline]
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    /// Consumes characters while `predicate` holds.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.bump();
        }
    }

    /// Consumes the next character if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use ratc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("==");
    /// assert!(cursor.match_char('='));
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Returns the text of the token in progress, `[start, position)`.
    pub fn lexeme(&self) -> &'src str {
        &self.source[self.start..self.position]
    }

    /// Starts the next token at the current position.
    pub fn reset_start(&mut self) {
        self.start = self.position;
    }

    /// Returns true once every character has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the byte offset where the current token starts.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the byte offset of the next character.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'src str {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("x = 42");
        assert_eq!(cursor.peek(), Some('x'));
        assert_eq!(cursor.start(), 0);
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.line(), 1);
    }

    #[test]
    fn test_bump_until_exhausted() {
        let mut cursor = Cursor::new("ab");
        assert_eq!(cursor.bump(), Some('a'));
        assert_eq!(cursor.bump(), Some('b'));
        assert_eq!(cursor.bump(), None);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_bump_utf8() {
        let mut cursor = Cursor::new("αβ");
        assert_eq!(cursor.bump(), Some('α'));
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.peek(), Some('β'));
    }

    #[test]
    fn test_peek_nth_past_multibyte() {
        let cursor = Cursor::new("é=");
        assert_eq!(cursor.peek_nth(1), Some('='));
    }

    #[test]
    fn test_lexeme_and_reset() {
        let mut cursor = Cursor::new("foo bar");
        cursor.eat_while(|c| c != ' ');
        assert_eq!(cursor.lexeme(), "foo");
        cursor.reset_start();
        assert_eq!(cursor.lexeme(), "");
        cursor.bump();
        cursor.reset_start();
        cursor.eat_while(|c| c.is_ascii_alphabetic());
        assert_eq!(cursor.lexeme(), "bar");
    }

    #[test]
    fn test_line_tracking() {
        let mut cursor = Cursor::new("a\nb\n\nc");
        cursor.eat_while(|c| c != 'c');
        assert_eq!(cursor.line(), 4);
    }

    #[test]
    fn test_start_never_passes_position() {
        let mut cursor = Cursor::new("xyz");
        cursor.bump();
        cursor.reset_start();
        assert!(cursor.start() <= cursor.position());
        assert!(cursor.position() <= cursor.source().len());
    }
}
