//! Configuration system for confpath.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and an explicit file)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of the run-as user and the path table
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (CONFPATH_*)
//! 3. Explicit config file (`ConfigBuilder::with_config_file`)
//! 4. User config (`~/.confpath/config.yaml`)
//! 5. Built-in defaults
//!
//! Path settings accumulate across sources; a higher source replaces an entry
//! of the same name.
//!
//! # Examples
//!
//! ```no_run
//! use confpath::config::{resolve_configured_paths, ConfigBuilder};
//!
//! let config = ConfigBuilder::new()
//!     .with_config_file("/etc/confpath.yaml")
//!     .build()
//!     .unwrap();
//!
//! for entry in resolve_configured_paths(&config, &config.path_resolver()) {
//!     match entry.result {
//!         Ok(path) => println!("{} = {}", entry.name, path.path().display()),
//!         Err(e) => eprintln!("{}: {e}", entry.name),
//!     }
//! }
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod paths;
pub mod schema;
pub mod validator;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use paths::{resolve_configured_paths, resolve_setting, ConfiguredPath};
pub use schema::Config;
pub use validator::ConfigValidator;
