//! Error types for ratc-lex.
//!
//! Running out of input is not an error here: the cursor reports it as `None`
//! and the state machine finalizes the pending token. Only input that is
//! structurally invalid for the active state becomes a [`LexError`].

use thiserror::Error;

/// A fatal lexical error. The run that produced it emits no END token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// Input ended inside a string literal.
    #[error("line {line}: unterminated string literal")]
    UnterminatedString {
        /// Line reached when input ran out.
        line: u32,
    },

    /// A character that starts no token class.
    #[error("line {line}: unrecognized character {ch:?}")]
    UnrecognizedCharacter {
        /// Line of the offending character.
        line: u32,
        /// The offending character.
        ch: char,
    },
}

impl LexError {
    /// Line the scanner was on when the error was raised.
    pub fn line(&self) -> u32 {
        match self {
            Self::UnterminatedString { line } | Self::UnrecognizedCharacter { line, .. } => *line,
        }
    }
}

/// Why a consumer stopped receiving before (or after) seeing END.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    /// The lexer worker failed; this is the terminal message of the run.
    #[error(transparent)]
    Lexical(#[from] LexError),

    /// Every sender was dropped and no END token was observed.
    #[error("token channel closed before END")]
    Disconnected,

    /// No token arrived within the consumer's bound.
    #[error("timed out waiting for the next token")]
    Timeout,

    /// The stream already ended, with END or with an error.
    #[error("token stream already finished")]
    Finished,

    /// The lexer worker thread could not be started.
    #[error("failed to spawn lexer worker: {0}")]
    Spawn(String),
}

/// Result type alias for lexing a whole buffer.
pub type LexResult<T> = std::result::Result<T, LexError>;
