//! Environment variable handling for configuration overrides.
//!
//! This module provides support for CONFPATH_* environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::path::Charset;
use std::env;

/// Run-as user override.
pub const USER_ENV: &str = "CONFPATH_USER";

/// Filesystem charset override.
pub const FILESYSTEM_CHARSET_ENV: &str = "CONFPATH_FILESYSTEM_CHARSET";

/// Absoluteness enforcement override.
pub const ENFORCE_ABSOLUTE_ENV: &str = "CONFPATH_ENFORCE_ABSOLUTE";

/// Log timestamp override.
pub const LOG_TIMESTAMP_ENV: &str = "CONFPATH_LOG_TIMESTAMP";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use confpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., unknown charset, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(user) = env::var(USER_ENV) {
            config.user = Some(user);
        }

        if let Ok(charset) = env::var(FILESYSTEM_CHARSET_ENV) {
            config.filesystem_charset = Some(charset.parse::<Charset>().map_err(|message| {
                Error::Validation {
                    field: FILESYSTEM_CHARSET_ENV.into(),
                    message,
                }
            })?);
        }

        if let Ok(val) = env::var(ENFORCE_ABSOLUTE_ENV) {
            config.enforce_absolute = Some(Self::parse_bool(ENFORCE_ABSOLUTE_ENV, &val)?);
        }

        if let Ok(val) = env::var(LOG_TIMESTAMP_ENV) {
            config.log_timestamp = Some(Self::parse_bool(LOG_TIMESTAMP_ENV, &val)?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Guard that sets a variable and restores the previous value on drop.
    struct EnvGuard {
        key: &'static str,
        old_value: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &'static str, value: &str) -> Self {
            let old_value = env::var(key).ok();
            env::set_var(key, value);
            Self { key, old_value }
        }

        fn remove(key: &'static str) -> Self {
            let old_value = env::var(key).ok();
            env::remove_var(key);
            Self { key, old_value }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.old_value {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }

    fn clear_all() -> Vec<EnvGuard> {
        [
            USER_ENV,
            FILESYSTEM_CHARSET_ENV,
            ENFORCE_ABSOLUTE_ENV,
            LOG_TIMESTAMP_ENV,
        ]
        .into_iter()
        .map(EnvGuard::remove)
        .collect()
    }

    #[test]
    fn test_parse_bool() {
        assert!(EnvironmentConfig::parse_bool("X", "true").unwrap());
        assert!(EnvironmentConfig::parse_bool("X", "ON").unwrap());
        assert!(EnvironmentConfig::parse_bool("X", "1").unwrap());
        assert!(!EnvironmentConfig::parse_bool("X", "no").unwrap());
        assert!(!EnvironmentConfig::parse_bool("X", "False").unwrap());
        assert!(EnvironmentConfig::parse_bool("X", "maybe").is_err());
    }

    #[test]
    #[serial]
    fn test_no_overrides_leaves_config() {
        let _guards = clear_all();
        let mut config = Config {
            user: Some("mpd".to_string()),
            ..Default::default()
        };
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config.user, Some("mpd".to_string()));
        assert_eq!(config.filesystem_charset, None);
    }

    #[test]
    #[serial]
    fn test_user_override() {
        let _guards = clear_all();
        let _user = EnvGuard::set(USER_ENV, "music");
        let mut config = Config {
            user: Some("mpd".to_string()),
            ..Default::default()
        };
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config.override_user(), Some("music"));
    }

    #[test]
    #[serial]
    fn test_charset_override() {
        let _guards = clear_all();
        let _charset = EnvGuard::set(FILESYSTEM_CHARSET_ENV, "latin1");
        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config.charset(), Charset::Latin1);
    }

    #[test]
    #[serial]
    fn test_invalid_charset_names_variable() {
        let _guards = clear_all();
        let _charset = EnvGuard::set(FILESYSTEM_CHARSET_ENV, "EBCDIC");
        let mut config = Config::default();
        let err = EnvironmentConfig::apply_overrides(&mut config).unwrap_err();
        assert!(err.to_string().contains(FILESYSTEM_CHARSET_ENV));
    }

    #[test]
    #[serial]
    fn test_enforce_absolute_override() {
        let _guards = clear_all();
        let _enforce = EnvGuard::set(ENFORCE_ABSOLUTE_ENV, "off");
        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config.enforce_absolute, Some(false));
    }

    #[test]
    #[serial]
    fn test_invalid_boolean() {
        let _guards = clear_all();
        let _stamp = EnvGuard::set(LOG_TIMESTAMP_ENV, "sometimes");
        let mut config = Config::default();
        assert!(matches!(
            EnvironmentConfig::apply_overrides(&mut config),
            Err(Error::Validation { .. })
        ));
    }
}
