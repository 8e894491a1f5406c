//! Command modules for the ratt CLI.
//!
//! This module contains implementations for all available subcommands.
//! Each subcommand is implemented in its own file following a standardized pattern.

pub mod common;
pub mod report;
pub mod traits;

pub mod check;
pub mod init;
pub mod lex;

// Re-export command types and functions
pub use check::{run_check, CheckArgs};
pub use init::{run_init, InitArgs};
pub use lex::{run_lex, LexArgs};
