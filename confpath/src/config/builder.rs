//! Builder for assembling the effective configuration.

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;
use std::path::PathBuf;

/// Builds a [`Config`] from files, environment and programmatic overrides.
///
/// Sources are applied from lowest to highest precedence: defaults, the user
/// config, the explicit config file, `CONFPATH_*` variables, and finally
/// configs passed to [`with_config`](Self::with_config). The result is
/// validated before it is returned.
///
/// # Examples
///
/// ```
/// use confpath::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         user: Some("mpd".to_string()),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.override_user(), Some("mpd"));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config_file: Option<PathBuf>,
    skip_user_config: bool,
    skip_files: bool,
    skip_env: bool,
    overrides: Vec<Config>,
}

impl ConfigBuilder {
    /// Create a builder that reads the user config and the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read this file on top of the user config.
    #[must_use]
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Do not read `~/.confpath/config.yaml`.
    #[must_use]
    pub fn skip_user_config(mut self) -> Self {
        self.skip_user_config = true;
        self
    }

    /// Do not read any configuration file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `CONFPATH_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply `config` with the highest precedence.
    ///
    /// May be called more than once; later calls win.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Load, merge and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// variable is malformed, or the merged configuration is invalid.
    pub fn build(self) -> Result<Config> {
        let mut config = if self.skip_files {
            Config::default()
        } else {
            let sources =
                ConfigLoader::load_all(self.config_file.as_deref(), !self.skip_user_config)?;
            for source in &sources {
                log::debug!(
                    "loaded configuration from {} (precedence {})",
                    source.path.display(),
                    source.precedence
                );
            }
            ConfigMerger::merge(sources)
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for overrides in &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::path::Charset;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_only() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("confpath.yaml");
        fs::write(
            &path,
            "user: mpd\nfilesystem_charset: latin1\npaths:\n  db_file: ~/db\n",
        )
        .unwrap();

        let config = ConfigBuilder::new()
            .with_config_file(&path)
            .skip_user_config()
            .skip_env()
            .build()
            .unwrap();

        assert_eq!(config.override_user(), Some("mpd"));
        assert_eq!(config.charset(), Charset::Latin1);
        assert_eq!(config.path_setting("db_file"), Some("~/db"));
    }

    #[test]
    fn test_programmatic_overrides_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("confpath.yaml");
        fs::write(&path, "user: mpd\nenforce_absolute: true\n").unwrap();

        let config = ConfigBuilder::new()
            .with_config_file(&path)
            .skip_user_config()
            .skip_env()
            .with_config(Config {
                user: Some("music".to_string()),
                ..Default::default()
            })
            .build()
            .unwrap();

        assert_eq!(config.override_user(), Some("music"));
        assert_eq!(config.enforce_absolute, Some(true));
    }

    #[test]
    fn test_invalid_merged_config_rejected() {
        let result = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                user: Some("bad/user".to_string()),
                ..Default::default()
            })
            .build();

        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn test_skip_files_ignores_config_file() {
        let config = ConfigBuilder::new()
            .with_config_file("/nonexistent/confpath.yaml")
            .skip_files()
            .skip_env()
            .build()
            .unwrap();
        assert_eq!(config, Config::default());
    }
}
