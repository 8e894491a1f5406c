//! Lexer worker lifecycle.
//!
//! The engine runs on its own named thread and talks to its consumer only
//! through the token channel. Threads are scoped so that tokens can keep
//! borrowing the caller's source buffer.

use std::io;
use std::thread::{self, Scope, ScopedJoinHandle};

use tracing::{debug, warn};

use crate::channel::{token_channel, TokenSender};
use crate::error::{ChannelError, LexResult};
use crate::lexer::Lexer;
use crate::token::Token;

/// Name given to the lexer worker thread.
pub const LEXER_THREAD_NAME: &str = "rat21f-lexer";

/// Starts the lexer on a dedicated thread inside `scope`.
///
/// The worker owns `sender` and drops it when it terminates, so a consumer
/// blocked on the channel always wakes up: with END, with the terminal
/// [`crate::Event::Failed`] message, or with disconnection if the worker
/// panicked.
///
/// # Example
///
/// ```
/// use ratc_lex::{spawn_lexer, token_channel};
///
/// let source = String::from("x = 1");
/// let (sender, receiver) = token_channel();
/// let tokens = std::thread::scope(|scope| {
///     spawn_lexer(scope, &source, sender).unwrap();
///     receiver.collect_all()
/// })
/// .unwrap();
/// assert_eq!(tokens.len(), 4);
/// ```
pub fn spawn_lexer<'scope, 'env, 'src: 'scope>(
    scope: &'scope Scope<'scope, 'env>,
    source: &'src str,
    sender: TokenSender<'src>,
) -> io::Result<ScopedJoinHandle<'scope, LexResult<()>>> {
    thread::Builder::new()
        .name(LEXER_THREAD_NAME.to_string())
        .spawn_scoped(scope, move || run_worker(source, sender))
}

fn run_worker<'src>(source: &'src str, mut sender: TokenSender<'src>) -> LexResult<()> {
    debug!(bytes = source.len(), "lexer worker started");

    let outcome = Lexer::new(source, &mut sender).run().map(|_| ());
    match &outcome {
        Ok(()) => debug!("lexer worker finished"),
        Err(error) => {
            warn!(%error, "lexer worker failed");
            sender.fail(error.clone());
        },
    }
    outcome
}

/// Lexes `source` on a worker thread while draining the channel here.
///
/// # Example
///
/// ```
/// use ratc_lex::{lex_concurrently, ChannelError, LexError};
///
/// assert_eq!(lex_concurrently("# hi").unwrap().len(), 2);
/// assert_eq!(
///     lex_concurrently("\"abc"),
///     Err(ChannelError::Lexical(LexError::UnterminatedString { line: 1 }))
/// );
/// ```
pub fn lex_concurrently(source: &str) -> Result<Vec<Token<'_>>, ChannelError> {
    let (sender, receiver) = token_channel();
    thread::scope(|scope| {
        spawn_lexer(scope, source, sender).map_err(|e| ChannelError::Spawn(e.to_string()))?;
        receiver.collect_all()
    })
}
