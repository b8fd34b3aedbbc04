//! Configuration validation.
//!
//! This module checks the run-as user and the path table before a
//! configuration is handed to a resolver.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Longest accepted user name or path setting name.
const MAX_NAME_LEN: usize = 255;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use confpath::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// Path values are only checked for presence. Their form is checked when
    /// they are resolved.
    ///
    /// # Errors
    ///
    /// Returns validation errors for invalid configurations.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref user) = config.user {
            Self::validate_user(user)?;
        }

        for (name, raw) in &config.paths {
            Self::validate_setting_name(name)?;

            if raw.is_empty() {
                return Err(Error::Validation {
                    field: format!("paths.{name}"),
                    message: "Cannot be empty".into(),
                });
            }
        }

        Ok(())
    }

    /// Validate the run-as user name.
    fn validate_user(user: &str) -> Result<()> {
        let message = if user.is_empty() {
            "Cannot be empty"
        } else if user.contains('\0') {
            "Cannot contain null bytes"
        } else if user.contains('/') || user.contains(':') {
            "Cannot contain '/' or ':'"
        } else if user.len() > MAX_NAME_LEN {
            "Cannot exceed 255 characters"
        } else {
            return Ok(());
        };

        Err(Error::Validation {
            field: "user".into(),
            message: message.into(),
        })
    }

    /// Validate a key of the path table.
    fn validate_setting_name(name: &str) -> Result<()> {
        if name.is_empty() || name.len() > MAX_NAME_LEN {
            return Err(Error::Validation {
                field: "paths".into(),
                message: format!("Invalid setting name '{name}': must be 1-255 characters"),
            });
        }

        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(Error::Validation {
                field: "paths".into(),
                message: format!(
                    "Invalid setting name '{name}': only letters, digits, '_' and '-' are allowed"
                ),
            });
        }

        Ok(())
    }
}
