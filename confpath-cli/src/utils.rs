//! Utility functions for CLI operations.
//!
//! This module provides configuration loading, logger setup and output
//! format selection shared across CLI commands.

use crate::error::CliError;
use clap::ValueEnum;
use confpath::logging::LOG_MODE_ENV;
use confpath::{init_logger, Config, ConfigBuilder, Logger};
use std::env;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,

    /// Skip `~/.confpath/config.yaml`.
    pub no_user_config: bool,
}

/// Output format for commands that print resolved paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one path per line
    Text,
    /// JSON
    Json,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. The `--config` file
/// 3. The user configuration file
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref path) = global.config {
        builder = builder.with_config_file(path);
    }
    if global.no_user_config {
        builder = builder.skip_user_config();
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Choose the logger for this run.
///
/// CLI flags win, then `CONFPATH_LOG_MODE`, then the configured
/// `log_level`. Timestamps come from the configuration only.
pub fn make_logger(global: &GlobalOptions, config: Option<&Config>) -> Logger {
    let mut logger = init_logger(global.verbose, global.quiet);

    if let Some(config) = config {
        let flags_set = global.verbose || global.quiet || env::var_os(LOG_MODE_ENV).is_some();
        if !flags_set {
            if let Some(level) = config.log_level {
                logger = Logger::new(level);
            }
        }
        logger = logger.with_timestamps(config.log_timestamp.unwrap_or(false));
    }

    logger
}

/// Install the logger for this run.
pub fn install_logger(global: &GlobalOptions, config: Option<&Config>) {
    // a second installation in the same process keeps the first logger
    let _ = make_logger(global, config).install();
}

/// Load configuration and install the logger it describes.
pub fn prepare(global: &GlobalOptions) -> Result<Config, CliError> {
    let config = load_configuration(global)?;
    install_logger(global, Some(&config));
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use confpath::LogLevel;

    #[test]
    fn test_flags_override_configured_level() {
        let global = GlobalOptions {
            verbose: true,
            ..Default::default()
        };
        let config = Config {
            log_level: Some(LogLevel::Quiet),
            log_timestamp: Some(true),
            ..Default::default()
        };

        let logger = make_logger(&global, Some(&config));
        assert_eq!(logger.level(), LogLevel::Verbose);
        assert!(logger.timestamps());
    }

    #[test]
    fn test_without_config_uses_defaults() {
        let global = GlobalOptions {
            quiet: true,
            ..Default::default()
        };
        let logger = make_logger(&global, None);
        assert_eq!(logger.level(), LogLevel::Quiet);
        assert!(!logger.timestamps());
    }
}
