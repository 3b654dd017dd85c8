//! Shell configuration: TOML file first, command-line flags on top.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tictactoe_core::Variant;
use tracing::instrument;

/// Config file picked up from the working directory when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

/// Settings for one shell session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Ruleset to play.
    variant: Variant,

    /// File that receives the log output.
    log_file: PathBuf,

    /// Default tracing filter, used when `RUST_LOG` is unset.
    log_filter: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            log_file: PathBuf::from("tictactoe.log"),
            log_filter: "info".to_string(),
        }
    }
}

impl ShellConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Resolves the configuration for a command line.
    ///
    /// An explicit `--config` path must exist. Without one, the default
    /// path is used if present, else built-in defaults. Flags win over the
    /// file.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH)?
            }
            None => Self::default(),
        };

        if let Some(variant) = cli.variant {
            config.variant = variant;
        }
        if let Some(log_file) = &cli.log_file {
            config.log_file = log_file.clone();
        }
        Ok(config)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn cli(args: &[&str]) -> Cli {
        use clap::Parser;
        Cli::try_parse_from(std::iter::once("tictactoe").chain(args.iter().copied()))
            .expect("valid arguments")
    }

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config("variant = \"three-stone\"\n");
        let config = ShellConfig::from_file(file.path()).expect("config parses");
        assert_eq!(config.variant(), &Variant::ThreeStone);
        assert_eq!(config.log_filter(), "info");
        assert_eq!(config.log_file(), &PathBuf::from("tictactoe.log"));
    }

    #[test]
    fn test_flags_override_file() {
        let file = write_config("variant = \"three-stone\"\nlog_filter = \"debug\"\n");
        let path = file.path().to_str().expect("utf-8 temp path");
        let config = ShellConfig::resolve(&cli(&["--config", path, "--variant", "classic"]))
            .expect("config resolves");
        assert_eq!(config.variant(), &Variant::Classic);
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("absent.toml");
        let err = ShellConfig::resolve(&cli(&["--config", missing.to_str().unwrap()]))
            .unwrap_err();
        assert!(err.message.contains("Failed to read"));
    }

    #[test]
    fn test_unknown_variant_in_file_is_an_error() {
        let file = write_config("variant = \"gomoku\"\n");
        let err = ShellConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
