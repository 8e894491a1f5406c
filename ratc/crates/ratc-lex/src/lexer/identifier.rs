//! Identifier lexing.

use crate::chars::is_ident_continue;
use crate::lexer::Transition;
use crate::sink::TokenSink;
use crate::token::TokenKind;
use crate::Lexer;

impl<'src, S: TokenSink<'src>> Lexer<'src, S> {
    /// Lexes an identifier.
    ///
    /// Consumes letters, digits and underscores, then emits IDENTIFIER on the
    /// first other character or at end of input. Keywords come out as
    /// identifiers too.
    pub(super) fn lex_identifier(&mut self) -> Transition {
        self.cursor.eat_while(is_ident_continue);
        self.emit(TokenKind::Identifier);
        self.resume()
    }
}
