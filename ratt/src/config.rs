//! Configuration module for the ratt CLI.
//!
//! This module handles loading, saving, and managing configuration
//! settings for the ratt application.

use dirs::{config_dir, home_dir};
use ratc_lex::DEFAULT_KEYWORDS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{RattError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "ratt.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Lexer and keyword settings.
    #[serde(default)]
    pub lexer: LexerConfig,

    /// Token report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Lexer-specific configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LexerConfig {
    /// Identifier lexemes reported as KEYWORD.
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,

    /// Longest wait for the next token, in milliseconds. Unbounded if unset.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

/// Report-specific configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportConfig {
    /// Report file. Standard output if unset.
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Append to an existing report file instead of replacing it.
    #[serde(default = "default_true")]
    pub append: bool,

    /// Append per-category token counts.
    #[serde(default)]
    pub summary: bool,

    /// Report format (text, json).
    #[serde(default = "default_format")]
    pub format: String,
}

/// Default value functions for configuration fields.
fn default_keywords() -> Vec<String> {
    DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

fn default_true() -> bool {
    true
}

fn default_format() -> String {
    "text".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            lexer: LexerConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
            timeout_ms: None,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output: None,
            append: true,
            summary: false,
            format: default_format(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. User's home directory
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Result<Config>` - The loaded configuration or an error
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RattError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| RattError::Config(format!("Failed to parse configuration: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to a specific path.
    ///
    /// # Arguments
    /// * `path` - Path where the configuration should be saved
    ///
    /// # Returns
    /// * `Result<()>` - Success or an error
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| RattError::Config(format!("Failed to serialize configuration: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("ratt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("ratt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
