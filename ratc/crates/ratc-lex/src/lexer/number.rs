//! Number literal lexing.
//!
//! Numbers are emitted as raw text; converting them to values is left to a
//! later phase.

use crate::lexer::{State, Transition};
use crate::sink::TokenSink;
use crate::token::TokenKind;
use crate::Lexer;

impl<'src, S: TokenSink<'src>> Lexer<'src, S> {
    /// Lexes the integer part of a number.
    ///
    /// A `.` after the digits is consumed and hands over to the Float state;
    /// anything else ends an INTEGER.
    pub(super) fn lex_integer(&mut self) -> Transition {
        self.cursor.eat_while(|c| c.is_ascii_digit());

        if self.cursor.match_char('.') {
            return Transition::Next(State::Float);
        }

        self.emit(TokenKind::Integer);
        self.resume()
    }

    /// Lexes the fraction digits of a real (possibly none).
    pub(super) fn lex_float(&mut self) -> Transition {
        self.cursor.eat_while(|c| c.is_ascii_digit());
        self.emit(TokenKind::Real);
        self.resume()
    }
}
