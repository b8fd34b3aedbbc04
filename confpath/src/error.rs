//! Error types for the confpath library.
//!
//! This module provides the error hierarchy for path resolution and
//! configuration loading, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a confpath error.
///
/// # Examples
///
/// ```
/// use confpath::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/var/lib/mpd".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Failures reported by [`PathResolver::resolve`](crate::PathResolver::resolve).
///
/// Every variant carries the offending input where one exists, so callers can
/// turn it into a diagnostic without keeping the raw text around.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The raw text cannot be represented in the filesystem charset.
    #[error("failed to convert path to file system charset {charset}: {raw}")]
    EncodingConversionFailed {
        /// The raw path text.
        raw: String,
        /// Name of the target charset.
        charset: String,
    },

    /// A plain path that is not absolute.
    #[error("not an absolute path: {raw}")]
    NotAbsolutePath {
        /// The raw path text.
        raw: String,
    },

    /// The configured run-as user does not exist.
    #[error("no such user: {user} (configured run-as user)")]
    UnknownOverrideUser {
        /// The configured user name.
        user: String,
    },

    /// The home directory of the current user could not be determined.
    #[error("problems getting home for current user")]
    UnknownHomeDirectory,

    /// A `~user` path names a user that does not exist.
    #[error("no such user: {user}")]
    UnknownEmbeddedUser {
        /// The user name embedded in the path.
        user: String,
    },
}

impl PathError {
    /// Check if the error stems from a failed identity lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// use confpath::PathError;
    ///
    /// let err = PathError::UnknownEmbeddedUser { user: "dave".to_string() };
    /// assert!(err.is_user_lookup_failure());
    /// assert!(!PathError::UnknownHomeDirectory.is_user_lookup_failure());
    /// ```
    #[must_use]
    pub fn is_user_lookup_failure(&self) -> bool {
        matches!(
            self,
            Self::UnknownOverrideUser { .. } | Self::UnknownEmbeddedUser { .. }
        )
    }

    /// The raw path text that caused the error, if the error carries it.
    #[must_use]
    pub fn raw_input(&self) -> Option<&str> {
        match self {
            Self::EncodingConversionFailed { raw, .. } | Self::NotAbsolutePath { raw } => Some(raw),
            _ => None,
        }
    }
}

/// The main error type for the confpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A configured path could not be resolved.
    #[error(transparent)]
    Path(#[from] PathError),

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Returns the path resolution failure, if this is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use confpath::{Error, PathError};
    ///
    /// let err = Error::from(PathError::UnknownHomeDirectory);
    /// assert_eq!(err.as_path_error(), Some(&PathError::UnknownHomeDirectory));
    /// ```
    #[must_use]
    pub fn as_path_error(&self) -> Option<&PathError> {
        match self {
            Self::Path(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_error_display() {
        let err = PathError::EncodingConversionFailed {
            raw: "/music/\u{4e2d}".to_string(),
            charset: "ISO-8859-1".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("file system charset"));
        assert!(display.contains("ISO-8859-1"));
        assert!(display.contains("/music/"));
    }

    #[test]
    fn test_not_absolute_display() {
        let err = PathError::NotAbsolutePath {
            raw: "music".to_string(),
        };
        assert_eq!(format!("{err}"), "not an absolute path: music");
    }

    #[test]
    fn test_override_and_embedded_users_are_distinct() {
        let override_err = PathError::UnknownOverrideUser {
            user: "mpd".to_string(),
        };
        let embedded_err = PathError::UnknownEmbeddedUser {
            user: "mpd".to_string(),
        };
        assert_ne!(override_err, embedded_err);
        assert_ne!(format!("{override_err}"), format!("{embedded_err}"));
        assert!(format!("{override_err}").contains("run-as"));
    }

    #[test]
    fn test_raw_input() {
        let err = PathError::NotAbsolutePath {
            raw: "rel".to_string(),
        };
        assert_eq!(err.raw_input(), Some("rel"));
        assert_eq!(PathError::UnknownHomeDirectory.raw_input(), None);
    }

    #[test]
    fn test_path_error_is_transparent() {
        let err: Error = PathError::UnknownHomeDirectory.into();
        assert_eq!(format!("{err}"), "problems getting home for current user");
        assert!(err.as_path_error().is_some());
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "user".to_string(),
            message: "must be non-empty".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("user"));
        assert!(display.contains("must be non-empty"));
        assert!(err.as_path_error().is_none());
    }

    #[test]
    fn test_invalid_path_error() {
        let err = Error::InvalidPath {
            path: PathBuf::from("/etc/confpath.yaml"),
            reason: "unreadable".to_string(),
        };
        let display = format!("{err}");
        let normalized = display.replace(std::path::MAIN_SEPARATOR, "/");
        assert!(normalized.contains("/etc/confpath.yaml"));
        assert!(display.contains("unreadable"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
    }
}
