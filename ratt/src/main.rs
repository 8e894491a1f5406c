//! ratt - command-line front end for the Rat21F lexer.
//!
//! Parses arguments with clap, loads `ratt.toml`, initializes logging and
//! dispatches to the command handlers.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_check, run_init, run_lex, CheckArgs, InitArgs, LexArgs};
use config::Config;
use error::{RattError, Result};

/// ratt - Rat21F token reporter
///
/// Splits Rat21F source into tokens on a worker thread and reports them.
#[derive(Parser, Debug)]
#[command(name = "ratt")]
#[command(author = "Rat21F Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Rat21F lexer front end", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "RATT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "RATT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "RATT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the ratt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a token report for a source file
    Lex(LexCommand),

    /// Lex source files and report only errors
    Check(CheckCommand),

    /// Write a ratt.toml with the default settings
    Init(InitCommand),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// Source file
    input: PathBuf,

    /// Report file (default: from config, else stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Replace the report file instead of appending
    #[arg(long)]
    truncate: bool,

    /// Append per-category token counts
    #[arg(long)]
    summary: bool,

    /// Report format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source files
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
struct InitCommand {
    /// Directory to write ratt.toml into (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing ratt.toml
    #[arg(short, long)]
    force: bool,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;
    init_logging(verbose, cli.no_color)?;

    execute_command(cli.command, verbose, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so a report on stdout stays clean.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(verbose);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| RattError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Lex(args) => {
            let lex_args = LexArgs {
                verbose,
                input: args.input,
                output: args.output,
                truncate: args.truncate,
                summary: args.summary,
                format: args.format,
            };
            let outcome = run_lex(lex_args, config)?;
            debug!(tokens = outcome.tokens, "report written");
            Ok(())
        },
        Commands::Check(args) => {
            let check_args = CheckArgs {
                verbose,
                inputs: args.inputs,
            };
            let summary = run_check(check_args)?;
            debug!(passed = summary.passed, "all files lexed");
            Ok(())
        },
        Commands::Init(args) => {
            let init_args = InitArgs {
                verbose,
                path: args.path,
                force: args.force,
            };
            let written = run_init(init_args)?;
            debug!(path = %written.display(), "configuration written");
            Ok(())
        },
    }
}
