//! Init command implementation.
//!
//! Writes a `ratt.toml` holding the default settings, including the full
//! keyword list, so it can be edited in place.

use std::path::PathBuf;

use tracing::debug;

use crate::commands::common::error_messages;
use crate::commands::traits::Command;
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{RattError, Result};

/// Arguments for the init command.
#[derive(Debug, Clone, Default)]
pub struct InitArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Directory to write `ratt.toml` into (default: current directory).
    pub path: Option<PathBuf>,
    /// Overwrite an existing `ratt.toml`.
    pub force: bool,
}

/// Init command handler.
pub struct InitCommand {
    args: InitArgs,
}

impl InitCommand {
    fn target_dir(&self) -> PathBuf {
        self.args.path.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

impl Command for InitCommand {
    type Args = InitArgs;
    type Output = PathBuf;

    fn new(args: InitArgs) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<PathBuf> {
        let dir = self.target_dir();
        debug!(command = Self::name(), dir = %dir.display(), "running");

        if dir.exists() && !dir.is_dir() {
            return Err(RattError::Validation(format!(
                "{}: {}",
                error_messages::TARGET_NOT_DIR,
                dir.display()
            )));
        }

        let config_path = dir.join(CONFIG_FILE_NAME);
        if config_path.exists() && !self.args.force {
            return Err(RattError::Validation(format!(
                "{}: {}",
                error_messages::CONFIG_EXISTS,
                config_path.display()
            )));
        }

        Config::default().save_to_path(&config_path)?;
        if self.args.verbose {
            eprintln!("Created {}", config_path.display());
        }
        Ok(config_path)
    }

    fn name() -> &'static str {
        "init"
    }
}

/// Convenience function to run the init command.
pub fn run_init(args: InitArgs) -> Result<PathBuf> {
    InitCommand::new(args).execute()
}
