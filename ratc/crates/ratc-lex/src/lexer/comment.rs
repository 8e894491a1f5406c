//! Comment lexing.

use crate::chars::is_line_end;
use crate::lexer::Transition;
use crate::sink::TokenSink;
use crate::token::TokenKind;
use crate::Lexer;

impl<'src, S: TokenSink<'src>> Lexer<'src, S> {
    /// Lexes a `#` comment up to, not including, the line break.
    ///
    /// A comment on the last line is emitted even without a trailing newline.
    pub(super) fn lex_comment(&mut self) -> Transition {
        self.cursor.eat_while(|c| !is_line_end(c));
        self.emit(TokenKind::Comment);
        self.resume()
    }
}
