//! Configuration merging and precedence handling.
//!
//! This module implements hierarchical merging of configuration sources.
//! Path settings accumulate across sources; everything else is replaced.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use confpath::config::{Config, ConfigMerger};
///
/// let low = Config { user: Some("low".to_string()), ..Default::default() };
/// let high = Config { user: Some("high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.user, Some("high".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - Path settings: accumulated, source wins per name
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.user.is_some() {
            target.user.clone_from(&source.user);
        }

        if source.filesystem_charset.is_some() {
            target.filesystem_charset = source.filesystem_charset;
        }

        if source.enforce_absolute.is_some() {
            target.enforce_absolute = source.enforce_absolute;
        }

        if source.log_level.is_some() {
            target.log_level = source.log_level;
        }

        if source.log_timestamp.is_some() {
            target.log_timestamp = source.log_timestamp;
        }

        for (name, raw) in &source.paths {
            target.paths.insert(name.clone(), raw.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Charset;
    use std::path::PathBuf;

    fn source(precedence: u8, config: Config) -> ConfigSource {
        ConfigSource {
            path: PathBuf::from(format!("/etc/confpath-{precedence}.yaml")),
            precedence,
            config,
        }
    }

    #[test]
    fn test_merge_empty() {
        assert_eq!(ConfigMerger::merge(Vec::new()), Config::default());
    }

    #[test]
    fn test_none_does_not_clear() {
        let mut target = Config {
            user: Some("mpd".to_string()),
            filesystem_charset: Some(Charset::Latin1),
            ..Default::default()
        };
        ConfigMerger::merge_into(&mut target, &Config::default());
        assert_eq!(target.user, Some("mpd".to_string()));
        assert_eq!(target.filesystem_charset, Some(Charset::Latin1));
    }

    #[test]
    fn test_simple_fields_overwrite() {
        let low = Config {
            enforce_absolute: Some(true),
            log_timestamp: Some(false),
            ..Default::default()
        };
        let high = Config {
            enforce_absolute: Some(false),
            ..Default::default()
        };
        let merged = ConfigMerger::merge(vec![source(1, low), source(2, high)]);
        assert_eq!(merged.enforce_absolute, Some(false));
        assert_eq!(merged.log_timestamp, Some(false));
    }

    #[test]
    fn test_paths_accumulate() {
        let mut low = Config::default();
        low.paths.insert("music_directory".into(), "~/music".into());
        low.paths.insert("db_file".into(), "~/db".into());

        let mut high = Config::default();
        high.paths.insert("db_file".into(), "/var/lib/mpd/db".into());
        high.paths.insert("log_file".into(), "~/log".into());

        let merged = ConfigMerger::merge(vec![source(1, low), source(2, high)]);
        assert_eq!(merged.paths.len(), 3);
        assert_eq!(merged.path_setting("music_directory"), Some("~/music"));
        assert_eq!(merged.path_setting("db_file"), Some("/var/lib/mpd/db"));
        assert_eq!(merged.path_setting("log_file"), Some("~/log"));
    }
}
