//! Common types and utilities for ratt commands.
//!
//! This module provides shared types, constants, and utility functions
//! used across all command implementations to ensure consistency.

use std::path::Path;

use crate::error::{RattError, Result};

// ============================================================================
// Report Format
// ============================================================================

/// Supported token report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// One `| LABEL ----- lexeme` line per token
    Text,
    /// A JSON document with a `tokens` array
    Json,
}

impl ReportFormat {
    /// Parse a string into a ReportFormat.
    ///
    /// # Arguments
    /// * `s` - The string to parse (case-insensitive)
    ///
    /// # Returns
    /// * `Option<ReportFormat>` - The parsed format or None if invalid
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

// ============================================================================
// Source Loading
// ============================================================================

/// Read a whole source file into memory.
///
/// # Arguments
/// * `path` - The source file to read
///
/// # Returns
/// * `Result<String>` - The file contents or an error naming the path
pub fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(RattError::Validation(format!(
            "{}: {}",
            error_messages::INPUT_PATH_NOT_EXIST,
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(RattError::Validation(format!(
            "{}: {}",
            error_messages::INPUT_PATH_NOT_FILE,
            path.display()
        )));
    }

    std::fs::read_to_string(path)
        .map_err(|e| RattError::FileOperation(format!("{}: {}", path.display(), e)))
}

// ============================================================================
// Error Messages
// ============================================================================

/// Standard error message templates.
///
/// These constants provide consistent error messages across all commands.
pub mod error_messages {
    /// Error when no input files are specified.
    pub const NO_INPUT_FILES: &str = "No input files specified";

    /// Error when input path does not exist.
    pub const INPUT_PATH_NOT_EXIST: &str = "Input path does not exist";

    /// Error when input path is not a file.
    pub const INPUT_PATH_NOT_FILE: &str = "Input path is not a file";

    /// Error when an unknown report format is specified.
    pub const UNKNOWN_FORMAT: &str = "Unknown report format";

    /// Error when the init target exists but is not a directory.
    pub const TARGET_NOT_DIR: &str = "Target path is not a directory";

    /// Error when init would overwrite a configuration file.
    pub const CONFIG_EXISTS: &str = "Configuration file already exists (use --force)";

    /// Error when files failed to lex.
    pub const FILES_FAILED: &str = "file(s) failed lexical analysis:";
}
