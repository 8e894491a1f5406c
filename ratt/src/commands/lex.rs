//! Lex command implementation.
//!
//! Runs the lexer worker on one source file and writes a token report while
//! the tokens arrive over the channel.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::thread::{self, ScopedJoinHandle};
use std::time::{Duration, Instant};

use ratc_lex::{
    spawn_lexer, token_channel, ChannelError, KeywordSet, LexResult, TokenReceiver,
};
use tracing::{debug, info, warn};

use crate::commands::common::{error_messages, read_source, ReportFormat};
use crate::commands::report::TokenReport;
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::{RattError, Result};

/// Arguments for the lex command.
#[derive(Debug, Clone, Default)]
pub struct LexArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Source file to lex.
    pub input: PathBuf,
    /// Report file (default: from config, else stdout).
    pub output: Option<PathBuf>,
    /// Replace the report file instead of appending to it.
    pub truncate: bool,
    /// Append per-category counts.
    pub summary: bool,
    /// Report format (default: from config).
    pub format: Option<String>,
}

/// Result of a successful lex run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexOutcome {
    /// Tokens reported, END included.
    pub tokens: usize,
}

/// Lex command handler.
pub struct LexCommand {
    args: LexArgs,
    config: Config,
}

impl LexCommand {
    /// Create a LexCommand that reads its defaults from `config`.
    pub fn with_config(args: LexArgs, config: Config) -> Self {
        Self { args, config }
    }

    fn report_format(&self) -> Result<ReportFormat> {
        let name = self
            .args
            .format
            .as_deref()
            .unwrap_or(&self.config.report.format);
        ReportFormat::parse(name).ok_or_else(|| {
            RattError::Validation(format!("{}: {}", error_messages::UNKNOWN_FORMAT, name))
        })
    }

    fn open_output(&self) -> Result<Box<dyn Write>> {
        let path = self
            .args
            .output
            .as_ref()
            .or(self.config.report.output.as_ref());

        let Some(path) = path else {
            return Ok(Box::new(io::stdout().lock()));
        };

        let append = self.config.report.append && !self.args.truncate;
        let file: File = OpenOptions::new()
            .create(true)
            .write(true)
            .append(append)
            .truncate(!append)
            .open(path)
            .map_err(|e| RattError::FileOperation(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), append, "writing report to file");
        Ok(Box::new(BufWriter::new(file)))
    }

    fn timeout(&self) -> Option<Duration> {
        self.config.lexer.timeout_ms.map(Duration::from_millis)
    }
}

impl Command for LexCommand {
    type Args = LexArgs;
    type Output = LexOutcome;

    fn new(args: LexArgs) -> Self {
        Self::with_config(args, Config::default())
    }

    fn execute(&self) -> Result<LexOutcome> {
        let start_time = Instant::now();
        debug!(command = Self::name(), file = %self.args.input.display(), "running");
        let source = read_source(&self.args.input)?;
        let format = self.report_format()?;
        let keywords = KeywordSet::new(self.config.lexer.keywords.iter().cloned());
        let timeout = self.timeout();

        let mut report = TokenReport::new(
            self.open_output()?,
            format,
            self.args.summary || self.config.report.summary,
        );
        report.begin()?;

        let (sender, mut receiver) = token_channel();
        let drained = thread::scope(|scope| -> Result<usize> {
            let worker = spawn_lexer(scope, &source, sender)
                .map_err(|e| ChannelError::Spawn(e.to_string()))?;
            let drained = drain(&mut receiver, &keywords, &mut report, timeout);
            settle_worker(worker);
            drained
        });

        // Tokens seen before a failure are still reported.
        let finished = report.finish();
        let tokens = drained?;
        finished?;

        if self.args.verbose {
            info!(
                file = %self.args.input.display(),
                tokens,
                elapsed = ?start_time.elapsed(),
                "lexed"
            );
        }
        Ok(LexOutcome { tokens })
    }

    fn name() -> &'static str {
        "lex"
    }
}

/// Moves tokens from the channel into the report until END.
fn drain<'src, W: Write>(
    receiver: &mut TokenReceiver<'src>,
    keywords: &KeywordSet,
    report: &mut TokenReport<'src, W>,
    timeout: Option<Duration>,
) -> Result<usize> {
    let mut count = 0;
    loop {
        let token = match timeout {
            Some(limit) => receiver.next_token_timeout(limit)?,
            None => receiver.next_token()?,
        };
        report.record(keywords.classify(&token), &token)?;
        count += 1;
        if token.is_end() {
            return Ok(count);
        }
    }
}

/// Joins the worker, logging a panic. Returns false if it panicked.
fn settle_worker(worker: ScopedJoinHandle<'_, LexResult<()>>) -> bool {
    match worker.join() {
        Ok(outcome) => {
            debug!(ok = outcome.is_ok(), "lexer worker joined");
            true
        },
        Err(_) => {
            warn!("lexer worker panicked");
            false
        },
    }
}

/// Convenience function to run the lex command.
pub fn run_lex(args: LexArgs, config: Config) -> Result<LexOutcome> {
    LexCommand::with_config(args, config).execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratc_lex::LexError;
    use tempfile::TempDir;

    fn write_source(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("input.rat");
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn args_for(input: PathBuf, output: PathBuf) -> LexArgs {
        LexArgs {
            input,
            output: Some(output),
            ..LexArgs::default()
        }
    }

    #[test]
    fn test_lex_writes_report() {
        let temp_dir = TempDir::new().unwrap();
        let input = write_source(&temp_dir, "while x < 10\n");
        let output = temp_dir.path().join("tokens.txt");

        let outcome = run_lex(args_for(input, output.clone()), Config::default()).unwrap();
        assert_eq!(outcome.tokens, 5);

        let report = std::fs::read_to_string(output).unwrap();
        assert!(report.starts_with("Token --------------------- Lexeme\n"));
        assert!(report.contains("| KEYWORD --------------------- while\n"));
        assert!(report.contains("| IDENTIFIER --------------------- x\n"));
        assert!(report.contains("| INTEGER --------------------- 10\n"));
    }

    #[test]
    fn test_lex_appends_by_default() {
        let temp_dir = TempDir::new().unwrap();
        let input = write_source(&temp_dir, "x\n");
        let output = temp_dir.path().join("tokens.txt");

        run_lex(args_for(input.clone(), output.clone()), Config::default()).unwrap();
        run_lex(args_for(input, output.clone()), Config::default()).unwrap();

        let report = std::fs::read_to_string(output).unwrap();
        assert_eq!(report.matches("Token --------------------- Lexeme").count(), 2);
    }

    #[test]
    fn test_lex_truncate_replaces_report() {
        let temp_dir = TempDir::new().unwrap();
        let input = write_source(&temp_dir, "x\n");
        let output = temp_dir.path().join("tokens.txt");
        std::fs::write(&output, "stale\n").unwrap();

        let mut args = args_for(input, output.clone());
        args.truncate = true;
        run_lex(args, Config::default()).unwrap();

        let report = std::fs::read_to_string(output).unwrap();
        assert!(!report.contains("stale"));
    }

    #[test]
    fn test_lex_failure_keeps_partial_report() {
        let temp_dir = TempDir::new().unwrap();
        let input = write_source(&temp_dir, "x = 1\ny = \"open\n");
        let output = temp_dir.path().join("tokens.txt");

        let result = run_lex(args_for(input, output.clone()), Config::default());
        assert!(matches!(
            result,
            Err(RattError::Lexical(LexError::UnterminatedString { line: 3 }))
        ));

        let report = std::fs::read_to_string(output).unwrap();
        assert!(report.contains("| INTEGER --------------------- 1\n"));
        assert!(report.contains("| IDENTIFIER --------------------- y\n"));
        assert!(!report.contains("| END"));
    }

    #[test]
    fn test_lex_custom_keywords() {
        let temp_dir = TempDir::new().unwrap();
        let input = write_source(&temp_dir, "let while\n");
        let output = temp_dir.path().join("tokens.txt");

        let mut config = Config::default();
        config.lexer.keywords = vec!["let".to_string()];
        run_lex(args_for(input, output.clone()), config).unwrap();

        let report = std::fs::read_to_string(output).unwrap();
        assert!(report.contains("| KEYWORD --------------------- let\n"));
        assert!(report.contains("| IDENTIFIER --------------------- while\n"));
    }

    #[test]
    fn test_lex_json_format() {
        let temp_dir = TempDir::new().unwrap();
        let input = write_source(&temp_dir, "print(1)\n");
        let output = temp_dir.path().join("tokens.json");

        let mut args = args_for(input, output.clone());
        args.format = Some("json".to_string());
        run_lex(args, Config::default()).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(value["tokens"].as_array().unwrap().len(), 5);
        assert_eq!(value["tokens"][0]["kind"], "KEYWORD");
    }

    #[test]
    fn test_lex_unknown_format() {
        let temp_dir = TempDir::new().unwrap();
        let input = write_source(&temp_dir, "x\n");
        let mut args = args_for(input, temp_dir.path().join("out"));
        args.format = Some("xml".to_string());

        let result = run_lex(args, Config::default());
        assert!(matches!(result, Err(RattError::Validation(_))));
    }

    #[test]
    fn test_lex_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        let args = args_for(
            temp_dir.path().join("missing.rat"),
            temp_dir.path().join("out"),
        );
        assert!(matches!(
            run_lex(args, Config::default()),
            Err(RattError::Validation(_))
        ));
    }

    #[test]
    fn test_settle_worker_reports_panic() {
        let settled = thread::scope(|scope| {
            let worker = scope.spawn(|| -> LexResult<()> { panic!("worker crashed") });
            settle_worker(worker)
        });
        assert!(!settled);
    }

    #[test]
    fn test_settle_worker_after_failure() {
        let settled = thread::scope(|scope| {
            let worker = scope.spawn(|| -> LexResult<()> {
                Err(LexError::UnrecognizedCharacter { line: 1, ch: '$' })
            });
            settle_worker(worker)
        });
        assert!(settled);
    }

    #[test]
    fn test_command_name() {
        assert_eq!(LexCommand::name(), "lex");
    }
}
