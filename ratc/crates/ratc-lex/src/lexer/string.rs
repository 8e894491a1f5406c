//! String literal lexing.

use crate::error::{LexError, LexResult};
use crate::lexer::Transition;
use crate::sink::TokenSink;
use crate::token::TokenKind;
use crate::Lexer;

impl<'src, S: TokenSink<'src>> Lexer<'src, S> {
    /// Lexes the body of a string literal whose opening `quote` is consumed.
    ///
    /// A backslash consumes the next character verbatim, so an escaped quote
    /// never closes the literal. Newlines are allowed and counted. The lexeme
    /// keeps both quotes and every escape as written.
    ///
    /// # Errors
    ///
    /// [`LexError::UnterminatedString`] if input ends before the closing quote.
    pub(super) fn lex_string(&mut self, quote: char) -> LexResult<Transition> {
        loop {
            let Some(c) = self.cursor.bump() else {
                return Err(self.unterminated_string());
            };

            if c == '\\' {
                if self.cursor.bump().is_none() {
                    return Err(self.unterminated_string());
                }
            } else if c == quote {
                self.emit(TokenKind::String);
                return Ok(self.resume());
            }
        }
    }

    fn unterminated_string(&self) -> LexError {
        LexError::UnterminatedString {
            line: self.cursor.line(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::LexError;
    use crate::token::TokenKind;
    use crate::tokenize;

    #[test]
    fn test_double_quoted() {
        let tokens = tokenize(r#""hello""#).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].lexeme, r#""hello""#);
        assert!(tokens[1].is_end());
    }

    #[test]
    fn test_single_quoted() {
        let tokens = tokenize("'hi' x").unwrap();
        assert_eq!(tokens[0].lexeme, "'hi'");
        assert_eq!(tokens[1].lexeme, "x");
    }

    #[test]
    fn test_escaped_quote_does_not_close() {
        let tokens = tokenize(r#""a\"b""#).unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].lexeme, r#""a\"b""#);
    }

    #[test]
    fn test_escaped_backslash_then_close() {
        let tokens = tokenize(r#""a\\" b"#).unwrap();
        assert_eq!(tokens[0].lexeme, r#""a\\""#);
        assert_eq!(tokens[1].lexeme, "b");
    }

    #[test]
    fn test_other_quote_does_not_close() {
        let tokens = tokenize(r#""it's""#).unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].lexeme, r#""it's""#);
    }

    #[test]
    fn test_multiline_string_records_closing_line() {
        let tokens = tokenize("\"one\ntwo\" z").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].line, 2);
        assert_eq!(tokens[0].lexeme, "\"one\ntwo\"");
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn test_escaped_newline_is_counted() {
        let tokens = tokenize("\"a\\\nb\"").unwrap();
        assert_eq!(tokens[0].line, 2);
    }

    #[test]
    fn test_empty_string() {
        let tokens = tokenize("\"\"").unwrap();
        assert_eq!(tokens[0].lexeme, "\"\"");
    }

    #[test]
    fn test_unterminated() {
        assert_eq!(
            tokenize("\"abc"),
            Err(LexError::UnterminatedString { line: 1 })
        );
    }

    #[test]
    fn test_unterminated_after_backslash() {
        assert_eq!(
            tokenize("x\n'abc\\"),
            Err(LexError::UnterminatedString { line: 2 })
        );
    }

    #[test]
    fn test_unterminated_reports_current_line() {
        assert_eq!(
            tokenize("\"a\nb\nc"),
            Err(LexError::UnterminatedString { line: 3 })
        );
    }
}
