//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, PathsCommand, ResolveCommand, ValidateCommand};
use crate::utils::GlobalOptions;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for resolving home-relative configuration paths.
#[derive(Parser)]
#[command(name = "confpath")]
#[command(version, about = "Resolve home-relative configuration paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Configuration file to read on top of the user configuration
    #[arg(long, value_name = "PATH", global = true, env = "CONFPATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Do not read ~/.confpath/config.yaml
    #[arg(long, global = true)]
    pub no_user_config: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Options shared by every command.
    pub fn global_options(&self) -> GlobalOptions {
        GlobalOptions {
            verbose: self.verbose,
            quiet: self.quiet,
            config: self.config.clone(),
            no_user_config: self.no_user_config,
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve a single raw path
    Resolve(ResolveCommand),

    /// Resolve every configured path setting
    Paths(PathsCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
