//! ratc-lex - Lexical Analyzer for the Rat21F Programming Language
//!
//! This crate turns a source buffer into a stream of classified tokens and
//! hands them to a consumer over a thread-safe channel.
//!
//! # Overview
//!
//! The lexer is a deterministic state machine. Each state consumes zero or
//! more characters, optionally emits one token, and names the next state.
//! The engine runs as its own worker thread and publishes tokens onto an
//! unbounded FIFO; the consumer pulls until it sees the END sentinel.
//!
//! # Example Usage
//!
//! ```
//! use ratc_lex::{spawn_lexer, token_channel, TokenKind};
//!
//! let source = "x = 42 # answer";
//! let (sender, mut receiver) = token_channel();
//!
//! std::thread::scope(|scope| {
//!     spawn_lexer(scope, source, sender).unwrap();
//!
//!     loop {
//!         let token = receiver.next_token().unwrap();
//!         println!("{:?}", token);
//!         if token.kind == TokenKind::End {
//!             break;
//!         }
//!     }
//! });
//!
//! // Or lex synchronously on the current thread
//! let tokens = ratc_lex::tokenize(source).unwrap();
//! assert_eq!(tokens[2].lexeme, "42");
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions
//! - [`cursor`] - Scan cursor: start, position and line
//! - [`chars`] - Character classes and the operator table
//! - [`lexer`] - The state machine
//! - [`sink`] - Where the engine emits tokens
//! - [`channel`] - Producer/consumer token channel
//! - [`worker`] - Running the engine on its own thread
//! - [`keyword`] - Re-tagging identifiers as keywords
//! - [`error`] - Lexical and channel errors
//!
//! # Token Categories
//!
//! - **Identifier**: `[a-zA-Z][a-zA-Z0-9_]*`
//! - **Integer**: `42`
//! - **Real**: `3.14`, `3.`
//! - **String**: `"a\"b"`, `'multi\nline'` (quotes and escapes kept verbatim)
//! - **Operator**: `! & % + - * / \ | ^ = ~ : > < .` and `++ -- >> << == != &&`
//! - **Separator**: `( ) { } [ ] , ;`
//! - **Comment**: `#` to end of line
//! - **Dedent**, **End**: emitted once input is exhausted
//!
//! # Failure
//!
//! An unterminated string or an unrecognized character stops the run. No END
//! is emitted; the consumer instead receives the [`LexError`] through the
//! channel.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod channel;
pub mod chars;
pub mod cursor;
pub mod error;
pub mod keyword;
pub mod lexer;
pub mod sink;
pub mod token;
pub mod worker;

mod edge_cases;

// Re-export main types for convenience
pub use channel::{token_channel, Event, TokenReceiver, TokenSender};
pub use cursor::Cursor;
pub use error::{ChannelError, LexError, LexResult};
pub use keyword::{Category, KeywordSet, DEFAULT_KEYWORDS};
pub use lexer::{tokenize, Lexer, State, Transition};
pub use sink::TokenSink;
pub use token::{Token, TokenKind};
pub use worker::{lex_concurrently, spawn_lexer, LEXER_THREAD_NAME};

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_and_lexemes(source: &str) -> Vec<(TokenKind, &str)> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| (t.kind, t.lexeme))
            .collect()
    }

    #[test]
    fn test_small_program() {
        let source = r#"
            def area(r) {
                return 3.14 * r * r;
            }
            print("done\n");
        "#;
        let tokens = kinds_and_lexemes(source);

        assert!(tokens.contains(&(TokenKind::Identifier, "def")));
        assert!(tokens.contains(&(TokenKind::Identifier, "area")));
        assert!(tokens.contains(&(TokenKind::Real, "3.14")));
        assert!(tokens.contains(&(TokenKind::Operator, "*")));
        assert!(tokens.contains(&(TokenKind::String, r#""done\n""#)));
        assert_eq!(tokens.last(), Some(&(TokenKind::End, "")));
    }

    #[test]
    fn test_line_numbers() {
        let tokens = tokenize("a\nb\n\nc").unwrap();
        let lines: Vec<u32> = tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 2, 4, 4]);
    }

    #[test]
    fn test_lines_never_decrease() {
        let source = "x = 'two\nlines'\ny # c\n\"three\n\nlines\" z\n";
        let tokens = tokenize(source).unwrap();
        assert!(tokens.windows(2).all(|w| w[0].line <= w[1].line));
    }

    #[test]
    fn test_exactly_one_end() {
        let tokens = tokenize("a + b; # c\n").unwrap();
        assert_eq!(tokens.iter().filter(|t| t.is_end()).count(), 1);
        assert!(tokens.last().unwrap().is_end());
    }

    #[test]
    fn test_no_dedent_without_indentation() {
        let tokens = tokenize("if x {\n    y\n}\n").unwrap();
        assert!(tokens.iter().all(|t| t.kind != TokenKind::Dedent));
    }

    #[test]
    fn test_lexemes_are_source_slices() {
        let source = "alpha = 'β' + 1.5";
        for token in tokenize(source).unwrap() {
            if !token.is_end() {
                assert!(source.contains(token.lexeme));
            }
        }
    }

    #[test]
    fn test_keyword_pass_over_channel() {
        let keywords = KeywordSet::default();
        let labels: Vec<_> = lex_concurrently("while x print")
            .unwrap()
            .iter()
            .map(|t| keywords.classify(t).name())
            .collect();
        assert_eq!(labels, vec!["KEYWORD", "IDENTIFIER", "KEYWORD", "END"]);
    }
}
