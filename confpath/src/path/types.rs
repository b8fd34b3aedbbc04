//! Result types for path resolution.

use std::fmt;
use std::path::{Path, PathBuf};

/// Which home directory, if any, was substituted during resolution.
///
/// # Examples
///
/// ```
/// use confpath::path::HomeExpansion;
///
/// let expansion = HomeExpansion::EmbeddedUser("bob".to_string());
/// assert_eq!(expansion.user(), Some("bob"));
/// assert_eq!(HomeExpansion::CurrentUser.user(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HomeExpansion {
    /// A plain path; nothing was substituted.
    None,

    /// `~` expanded to the current process user's home.
    CurrentUser,

    /// `~` expanded to the configured run-as user's home.
    OverrideUser(String),

    /// `~user` expanded to the named user's home.
    EmbeddedUser(String),
}

impl HomeExpansion {
    /// The user whose home was substituted, when it was looked up by name.
    #[must_use]
    pub fn user(&self) -> Option<&str> {
        match self {
            Self::OverrideUser(user) | Self::EmbeddedUser(user) => Some(user),
            Self::None | Self::CurrentUser => None,
        }
    }
}

impl fmt::Display for HomeExpansion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::CurrentUser => write!(f, "current user"),
            Self::OverrideUser(user) => write!(f, "run-as user {user}"),
            Self::EmbeddedUser(user) => write!(f, "user {user}"),
        }
    }
}

/// A fully resolved configuration path.
///
/// Only [`PathResolver`](crate::PathResolver) produces these, so a
/// `ResolvedPath` is always a complete path, and absolute whenever the
/// resolver enforces absoluteness.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedPath {
    /// The resolved path in native encoding.
    path: PathBuf,
    /// The raw text it was resolved from.
    original: String,
    /// The substituted home directory.
    expansion: HomeExpansion,
}

impl ResolvedPath {
    pub(crate) fn new(path: PathBuf, original: &str, expansion: HomeExpansion) -> Self {
        Self {
            path,
            original: original.to_string(),
            expansion,
        }
    }

    /// Get a reference to the resolved path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw text before resolution.
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Which home directory was substituted.
    #[must_use]
    pub fn expansion(&self) -> &HomeExpansion {
        &self.expansion
    }

    /// Check if a home directory was substituted.
    #[must_use]
    pub fn was_expanded(&self) -> bool {
        self.expansion != HomeExpansion::None
    }

    /// Convert into the underlying resolved `PathBuf`.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }
}

impl AsRef<Path> for ResolvedPath {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}
