//! Configuration schema definitions.
//!
//! This module defines the configuration structure for confpath: the run-as
//! user, the filesystem charset, absoluteness enforcement, logging options and
//! the table of named path settings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;
use crate::path::{platform_enforces_absolute, Charset, PathResolver};

/// Complete configuration structure.
///
/// Every field is optional so that configurations from several sources can be
/// merged; the accessor methods supply the defaults.
///
/// # Examples
///
/// ```
/// use confpath::config::Config;
///
/// let config: Config = serde_yaml::from_str(
///     "user: mpd\npaths:\n  music_directory: ~/music\n",
/// ).unwrap();
/// assert_eq!(config.override_user(), Some("mpd"));
/// assert_eq!(config.path_setting("music_directory"), Some("~/music"));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// User whose home directory replaces a bare `~`.
    pub user: Option<String>,

    /// Charset of file names on the filesystem.
    pub filesystem_charset: Option<Charset>,

    /// Require plain paths to be absolute.
    pub enforce_absolute: Option<bool>,

    /// Log verbosity.
    pub log_level: Option<LogLevel>,

    /// Prefix log lines with a timestamp.
    pub log_timestamp: Option<bool>,

    /// Named path settings, as written in the configuration.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub paths: BTreeMap<String, String>,
}

impl Config {
    /// The configured run-as user, if any.
    #[must_use]
    pub fn override_user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// The filesystem charset, defaulting to UTF-8.
    #[must_use]
    pub fn charset(&self) -> Charset {
        self.filesystem_charset.unwrap_or_default()
    }

    /// Whether plain paths must be absolute, defaulting to the platform rule.
    #[must_use]
    pub fn enforces_absolute(&self) -> bool {
        self.enforce_absolute.unwrap_or_else(platform_enforces_absolute)
    }

    /// The raw text of a named path setting.
    #[must_use]
    pub fn path_setting(&self, name: &str) -> Option<&str> {
        self.paths.get(name).map(String::as_str)
    }

    /// Build a system-backed resolver honoring this configuration's charset
    /// and absoluteness settings.
    #[must_use]
    pub fn path_resolver(&self) -> PathResolver {
        PathResolver::new()
            .with_charset(self.charset())
            .with_enforce_absolute(self.enforces_absolute())
    }
}
