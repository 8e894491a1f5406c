//! Check command implementation.
//!
//! Lexes each input file and reports `ok` or the first lexical error.

use std::path::{Path, PathBuf};

use ratc_lex::lex_concurrently;
use tracing::debug;

use crate::commands::common::{error_messages, read_source};
use crate::commands::traits::Command;
use crate::error::{RattError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Source files to check.
    pub inputs: Vec<PathBuf>,
}

/// Per-run totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    /// Files that lexed through END.
    pub passed: usize,
    /// Files that failed to read or lex.
    pub failed: usize,
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    fn check_file(&self, path: &Path) -> Result<usize> {
        let source = read_source(path)?;
        let tokens = lex_concurrently(&source)?;
        Ok(tokens.len())
    }

    fn check_all(&self) -> CheckSummary {
        let mut summary = CheckSummary::default();
        for path in &self.args.inputs {
            match self.check_file(path) {
                Ok(tokens) => {
                    summary.passed += 1;
                    debug!(file = %path.display(), tokens, "check passed");
                    if self.args.verbose {
                        println!("{}: ok ({} tokens)", path.display(), tokens);
                    } else {
                        println!("{}: ok", path.display());
                    }
                },
                Err(e) => {
                    summary.failed += 1;
                    eprintln!("{}: {}", path.display(), e);
                },
            }
        }
        summary
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = CheckSummary;

    fn new(args: CheckArgs) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<CheckSummary> {
        if self.args.inputs.is_empty() {
            return Err(RattError::Validation(
                error_messages::NO_INPUT_FILES.to_string(),
            ));
        }

        debug!(command = Self::name(), files = self.args.inputs.len(), "running");
        let summary = self.check_all();
        if summary.failed > 0 {
            return Err(RattError::CommandExecution(format!(
                "{} {} {}",
                summary.failed,
                error_messages::FILES_FAILED,
                self.args.inputs.len()
            )));
        }
        Ok(summary)
    }

    fn name() -> &'static str {
        "check"
    }
}

/// Convenience function to run the check command.
pub fn run_check(args: CheckArgs) -> Result<CheckSummary> {
    CheckCommand::new(args).execute()
}
