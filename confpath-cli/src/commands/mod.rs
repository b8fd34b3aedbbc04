//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `resolve`: Resolve a single raw path
//! - `paths`: Resolve every configured path setting
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod paths;
pub mod resolve;
pub mod validate;

pub use completions::CompletionsCommand;
pub use paths::PathsCommand;
pub use resolve::ResolveCommand;
pub use validate::ValidateCommand;
