#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # confpath
//!
//! A library for resolving home-relative configuration paths.
//!
//! Path settings in a configuration file may start with `~` or `~user`. This
//! library substitutes the right home directory, converts the text to the
//! filesystem charset and checks that plain paths are absolute.
//!
//! ## Core Types
//!
//! - [`PathResolver`]: resolves raw path text
//! - [`ResolvedPath`] and [`HomeExpansion`]: the result of a resolution
//! - [`PathError`], [`Error`] and [`Result`]: Error handling types
//! - [`Config`] and [`ConfigBuilder`]: layered configuration
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use confpath::path::{FixedHome, UserTable};
//! use confpath::{PathError, PathResolver};
//! use std::path::Path;
//!
//! let resolver = PathResolver::new()
//!     .with_identity_service(UserTable::new().with_user("bob", "/home/bob"))
//!     .with_home_directory(FixedHome::new("/home/alice"))
//!     .with_enforce_absolute(true);
//!
//! let music = resolver.resolve("~bob/music", None).unwrap();
//! assert_eq!(music.path(), Path::new("/home/bob/music"));
//!
//! let err = resolver.resolve("music", None).unwrap_err();
//! assert_eq!(err, PathError::NotAbsolutePath { raw: "music".to_string() });
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, PathError, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{Charset, HomeExpansion, PathResolver, ResolvedPath};
