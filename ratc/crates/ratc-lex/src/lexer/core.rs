//! Core lexer implementation.
//!
//! This module contains the Lexer struct, the state set, and the run loop.

use tracing::trace;

use crate::chars::{
    is_ident_start, is_operator, is_quote, is_separator, is_whitespace, COMMENT_MARKER,
};
use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::sink::TokenSink;
use crate::token::{Token, TokenKind};

/// A state of the scanner.
///
/// Each state is a scan procedure: it consumes zero or more characters,
/// possibly emits one token, and names the state to run next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Loop head; skips whitespace and dispatches on the next character.
    Start,
    /// `#` seen.
    Comment,
    /// Letter seen.
    Identifier,
    /// Digit seen.
    Integer,
    /// Integer part and `.` consumed.
    Float,
    /// Opening `quote` consumed.
    String {
        /// The quote character that closes this literal.
        quote: char,
    },
    /// Operator character seen.
    Operator,
    /// Separator character seen.
    Separator,
}

/// Outcome of one state step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Run this state next.
    Next(State),
    /// The input is consumed and any pending token has been emitted.
    Exhausted,
}

/// Lexer for the Rat21F language.
///
/// The lexer owns its [`Cursor`] and an indentation stack, and publishes
/// every token to a [`TokenSink`]. A successful run always ends with exactly
/// one END token, possibly preceded by a DEDENT.
///
/// # Example
///
/// ```
/// use ratc_lex::{Lexer, TokenKind};
///
/// let tokens = Lexer::new("x == 1", Vec::new()).run().unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Identifier, TokenKind::Operator, TokenKind::Integer, TokenKind::End]
/// );
/// ```
pub struct Lexer<'src, S> {
    /// Scan position and line tracking.
    pub(super) cursor: Cursor<'src>,

    /// Where emitted tokens go.
    sink: S,

    /// Open indentation levels. Only popped, once, at shutdown.
    indent_levels: Vec<usize>,
}

impl<'src, S: TokenSink<'src>> Lexer<'src, S> {
    /// Creates a new lexer over `source` that emits into `sink`.
    pub fn new(source: &'src str, sink: S) -> Self {
        Self {
            cursor: Cursor::new(source),
            sink,
            indent_levels: vec![0],
        }
    }

    /// Scans the whole input and hands the sink back.
    ///
    /// On a lexical error the run stops where it is: no cleanup runs and no
    /// END is emitted. Tokens published before the error stay published.
    pub fn run(mut self) -> LexResult<S> {
        let mut state = State::Start;
        loop {
            match self.step(state)? {
                Transition::Next(next) => state = next,
                Transition::Exhausted => {
                    self.cleanup();
                    return Ok(self.sink);
                },
            }
        }
    }

    /// Runs a single state.
    pub fn step(&mut self, state: State) -> LexResult<Transition> {
        match state {
            State::Start => self.lex_start(),
            State::Comment => Ok(self.lex_comment()),
            State::Identifier => Ok(self.lex_identifier()),
            State::Integer => Ok(self.lex_integer()),
            State::Float => Ok(self.lex_float()),
            State::String { quote } => self.lex_string(quote),
            State::Operator => Ok(self.lex_operator()),
            State::Separator => Ok(self.lex_separator()),
        }
    }

    /// The start state: skips whitespace, then picks the state for the next
    /// character class.
    fn lex_start(&mut self) -> LexResult<Transition> {
        loop {
            let Some(c) = self.cursor.peek() else {
                return Ok(Transition::Exhausted);
            };

            let next = match c {
                COMMENT_MARKER => State::Comment,
                c if is_ident_start(c) => State::Identifier,
                c if c.is_ascii_digit() => State::Integer,
                c if is_separator(c) => State::Separator,
                c if is_operator(c) => State::Operator,
                c if is_quote(c) => {
                    self.cursor.bump();
                    State::String { quote: c }
                },
                c if is_whitespace(c) => {
                    self.cursor.bump();
                    self.cursor.reset_start();
                    continue;
                },
                ch => {
                    return Err(LexError::UnrecognizedCharacter {
                        line: self.cursor.line(),
                        ch,
                    })
                },
            };

            return Ok(Transition::Next(next));
        }
    }

    /// Publishes `[start, position)` as a token of `kind` and starts the next
    /// token at the current position.
    pub(super) fn emit(&mut self, kind: TokenKind) {
        let token = Token::new(kind, self.cursor.line(), self.cursor.lexeme());
        trace!(kind = %token.kind, line = token.line, lexeme = token.lexeme, "emit");
        self.sink.emit(token);
        self.cursor.reset_start();
    }

    /// The transition out of a state that just emitted its token.
    pub(super) fn resume(&self) -> Transition {
        if self.cursor.is_at_end() {
            Transition::Exhausted
        } else {
            Transition::Next(State::Start)
        }
    }

    /// Closes one indentation level and emits the END sentinel.
    fn cleanup(&mut self) {
        if self.indent_levels.pop().is_some_and(|level| level != 0) {
            self.emit(TokenKind::Dedent);
        }
        self.emit(TokenKind::End);
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

/// Lexes `source` on the calling thread and collects the stream.
///
/// # Example
///
/// ```
/// use ratc_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("42.5").unwrap();
/// assert_eq!(tokens[0].kind, TokenKind::Real);
/// assert_eq!(tokens[0].lexeme, "42.5");
/// assert!(tokens[1].is_end());
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Token<'_>>> {
    Lexer::new(source, Vec::new()).run()
}
