//! Error handling module for the ratt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use ratc_lex::{ChannelError, LexError};
use thiserror::Error;

/// Main error type for the ratt CLI application.
#[derive(Error, Debug)]
pub enum RattError {
    /// Error when a configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when reading a source file or writing a report fails.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when a command finishes with failures.
    #[error("Command execution failed: {0}")]
    CommandExecution(String),

    /// The lexer rejected the source.
    #[error(transparent)]
    Lexical(#[from] LexError),

    /// The token stream ended without END or a lexical error.
    #[error(transparent)]
    Channel(ChannelError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ChannelError> for RattError {
    fn from(error: ChannelError) -> Self {
        match error {
            ChannelError::Lexical(error) => Self::Lexical(error),
            other => Self::Channel(other),
        }
    }
}

/// Result type alias using RattError.
pub type Result<T> = std::result::Result<T, RattError>;
