//! Edge case tests for ratc-lex
