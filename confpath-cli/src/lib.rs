//! Library exports for confpath-cli.
//!
//! This module exports the CLI structure for use by tests and documentation
//! tooling.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

// Re-export CLI for documentation tooling
pub use cli::Cli;
