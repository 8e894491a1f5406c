//! Emission seam between the lexer engine and whoever receives its tokens.

use crate::token::Token;

/// Destination for tokens produced by [`crate::Lexer`].
///
/// Emission must not block: the engine never waits on its consumer.
pub trait TokenSink<'src> {
    /// Publishes one token.
    fn emit(&mut self, token: Token<'src>);
}

impl<'src> TokenSink<'src> for Vec<Token<'src>> {
    fn emit(&mut self, token: Token<'src>) {
        self.push(token);
    }
}

impl<'src, T: TokenSink<'src> + ?Sized> TokenSink<'src> for &mut T {
    fn emit(&mut self, token: Token<'src>) {
        (**self).emit(token);
    }
}
