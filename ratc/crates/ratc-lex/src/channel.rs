//! Token channel between the lexer worker and its consumer.
//!
//! An unbounded FIFO built on `crossbeam::channel`. The producer never
//! blocks; the consumer blocks until a token arrives. A run ends in one of
//! three observable ways:
//!
//! - an END token: the stream is complete;
//! - an [`Event::Failed`] message: the lexer hit a fatal error;
//! - disconnection with neither: the producer went away (for example it
//!   panicked) and the stream is truncated.

use std::time::Duration;

use crossbeam::channel::{self, Receiver, RecvTimeoutError, Sender};
use tracing::trace;

use crate::error::{ChannelError, LexError};
use crate::sink::TokenSink;
use crate::token::Token;

/// One message on the token channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<'src> {
    /// A token, in emission order.
    Token(Token<'src>),
    /// The producer failed; nothing follows.
    Failed(LexError),
}

/// Creates a connected sender/receiver pair.
///
/// # Example
///
/// ```
/// use ratc_lex::{token_channel, Token, TokenKind};
///
/// let (sender, mut receiver) = token_channel();
/// sender.emit(Token::new(TokenKind::End, 1, ""));
/// assert!(receiver.next_token().unwrap().is_end());
/// ```
pub fn token_channel<'src>() -> (TokenSender<'src>, TokenReceiver<'src>) {
    let (tx, rx) = channel::unbounded();
    (
        TokenSender { tx },
        TokenReceiver {
            rx,
            finished: false,
        },
    )
}

/// Producer half of the token channel.
#[derive(Debug, Clone)]
pub struct TokenSender<'src> {
    tx: Sender<Event<'src>>,
}

impl<'src> TokenSender<'src> {
    /// Publishes a token without waiting.
    pub fn emit(&self, token: Token<'src>) {
        self.send(Event::Token(token));
    }

    /// Publishes the terminal error of a failed run.
    pub fn fail(&self, error: LexError) {
        self.send(Event::Failed(error));
    }

    fn send(&self, event: Event<'src>) {
        // A consumer that stopped listening is not the producer's problem.
        if self.tx.send(event).is_err() {
            trace!("token receiver dropped, discarding event");
        }
    }
}

impl<'src> TokenSink<'src> for TokenSender<'src> {
    fn emit(&mut self, token: Token<'src>) {
        self.send(Event::Token(token));
    }
}

/// Consumer half of the token channel.
///
/// Also an iterator: it yields END (or the error) as its last item.
#[derive(Debug)]
pub struct TokenReceiver<'src> {
    rx: Receiver<Event<'src>>,

    /// Set once END, a failure or disconnection has been observed.
    finished: bool,
}

impl<'src> TokenReceiver<'src> {
    /// Blocks until the next token is available.
    ///
    /// # Errors
    ///
    /// - [`ChannelError::Lexical`] if the producer reported a failure
    /// - [`ChannelError::Disconnected`] if the producer went away before END
    /// - [`ChannelError::Finished`] if the stream already ended
    pub fn next_token(&mut self) -> Result<Token<'src>, ChannelError> {
        if self.finished {
            return Err(ChannelError::Finished);
        }
        let event = self.rx.recv().map_err(|_| ChannelError::Disconnected);
        self.accept(event)
    }

    /// Like [`next_token`](Self::next_token), but gives up after `timeout`.
    ///
    /// A timeout does not end the stream; the caller may retry.
    pub fn next_token_timeout(&mut self, timeout: Duration) -> Result<Token<'src>, ChannelError> {
        if self.finished {
            return Err(ChannelError::Finished);
        }
        let event = self.rx.recv_timeout(timeout).map_err(|e| match e {
            RecvTimeoutError::Timeout => ChannelError::Timeout,
            RecvTimeoutError::Disconnected => ChannelError::Disconnected,
        });
        self.accept(event)
    }

    fn accept(
        &mut self,
        event: Result<Event<'src>, ChannelError>,
    ) -> Result<Token<'src>, ChannelError> {
        match event {
            Ok(Event::Token(token)) => {
                self.finished = token.is_end();
                Ok(token)
            },
            Ok(Event::Failed(error)) => {
                self.finished = true;
                Err(error.into())
            },
            Err(ChannelError::Timeout) => Err(ChannelError::Timeout),
            Err(error) => {
                self.finished = true;
                Err(error)
            },
        }
    }

    /// Returns true once the stream has ended, successfully or not.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Drains the whole stream, END included.
    pub fn collect_all(self) -> Result<Vec<Token<'src>>, ChannelError> {
        self.collect()
    }
}

impl<'src> Iterator for TokenReceiver<'src> {
    type Item = Result<Token<'src>, ChannelError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            None
        } else {
            Some(self.next_token())
        }
    }
}
