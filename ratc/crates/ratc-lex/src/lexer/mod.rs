//! Lexer module.
//!
//! This module organizes the state machine into smaller, focused components:
//! - `core` - Lexer struct, state dispatch, run loop and cleanup
//! - `identifier` - Identifier state
//! - `number` - Integer and Float states
//! - `string` - String state
//! - `operator` - Operator and Separator states
//! - `comment` - Comment state

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::{tokenize, Lexer, State, Transition};
