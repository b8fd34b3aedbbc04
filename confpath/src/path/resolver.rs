//! Resolution of raw configuration paths.
//!
//! This module provides the `PathResolver` type, which turns the text of a
//! path setting into an absolute, filesystem-native path.

use std::fmt;
use std::sync::Arc;

use crate::error::PathError;
use crate::path::encoding::{Charset, EncodedPath, EncodingError, PathEncoder};
use crate::path::form::PathForm;
use crate::path::identity::{HomeDirectory, IdentityService, SystemHome, SystemIdentity};
use crate::path::join::join;
use crate::path::types::{HomeExpansion, ResolvedPath};

/// Whether the host platform requires configured paths to be absolute.
///
/// Windows paths are left to the platform; every other target enforces
/// absoluteness by default.
#[must_use]
pub const fn platform_enforces_absolute() -> bool {
    !cfg!(windows)
}

/// Resolves raw configuration paths, expanding `~` and `~user`.
///
/// The resolver holds no state besides its collaborators and settings, so one
/// instance can be cloned or shared across threads freely. Lookups go through
/// an [`IdentityService`] and a [`HomeDirectory`], and may block.
///
/// # Examples
///
/// ```
/// use confpath::path::{FixedHome, PathResolver, UserTable};
/// use std::path::Path;
///
/// let resolver = PathResolver::new()
///     .with_identity_service(UserTable::new().with_user("bob", "/home/bob"))
///     .with_home_directory(FixedHome::new("/home/alice"))
///     .with_enforce_absolute(true);
///
/// let music = resolver.resolve("~/music", None).unwrap();
/// assert_eq!(music.path(), Path::new("/home/alice/music"));
///
/// let bob = resolver.resolve("~bob/music", Some("carol")).unwrap();
/// assert_eq!(bob.path(), Path::new("/home/bob/music"));
///
/// assert!(resolver.resolve("music", None).is_err());
/// ```
#[derive(Clone)]
pub struct PathResolver {
    identity: Arc<dyn IdentityService>,
    home: Arc<dyn HomeDirectory>,
    encoder: Arc<dyn PathEncoder>,
    /// Reject plain paths that are not absolute.
    enforce_absolute: bool,
}

impl Default for PathResolver {
    fn default() -> Self {
        Self {
            identity: Arc::new(SystemIdentity),
            home: Arc::new(SystemHome),
            encoder: Arc::new(Charset::Utf8),
            enforce_absolute: platform_enforces_absolute(),
        }
    }
}

impl fmt::Debug for PathResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathResolver")
            .field("enforce_absolute", &self.enforce_absolute)
            .finish_non_exhaustive()
    }
}

impl PathResolver {
    /// Create a resolver backed by the system user database, the `home`
    /// crate, and UTF-8 path encoding.
    ///
    /// # Examples
    ///
    /// ```
    /// use confpath::path::PathResolver;
    ///
    /// let resolver = PathResolver::new();
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the identity service used for `~user` and the run-as user.
    #[must_use]
    pub fn with_identity_service(mut self, identity: impl IdentityService + 'static) -> Self {
        self.identity = Arc::new(identity);
        self
    }

    /// Replace the lookup used for the current user's home directory.
    #[must_use]
    pub fn with_home_directory(mut self, home: impl HomeDirectory + 'static) -> Self {
        self.home = Arc::new(home);
        self
    }

    /// Encode paths for a filesystem using `charset`.
    ///
    /// # Examples
    ///
    /// ```
    /// use confpath::path::{Charset, PathResolver};
    ///
    /// let resolver = PathResolver::new().with_charset(Charset::Latin1);
    /// assert!(resolver.resolve("/music/\u{4e2d}", None).is_err());
    /// ```
    #[must_use]
    pub fn with_charset(self, charset: Charset) -> Self {
        self.with_encoder(charset)
    }

    /// Replace the path encoder.
    #[must_use]
    pub fn with_encoder(mut self, encoder: impl PathEncoder + 'static) -> Self {
        self.encoder = Arc::new(encoder);
        self
    }

    /// Configure whether plain paths must be absolute.
    ///
    /// Defaults to [`platform_enforces_absolute`]. With enforcement off, plain
    /// paths are passed through after encoding without any check.
    ///
    /// # Examples
    ///
    /// ```
    /// use confpath::path::PathResolver;
    ///
    /// let lenient = PathResolver::new().with_enforce_absolute(false);
    /// assert!(lenient.resolve("music", None).is_ok());
    /// ```
    #[must_use]
    pub fn with_enforce_absolute(mut self, enforce: bool) -> Self {
        self.enforce_absolute = enforce;
        self
    }

    /// Whether plain paths must be absolute.
    #[must_use]
    pub fn enforces_absolute(&self) -> bool {
        self.enforce_absolute
    }

    /// Resolve a raw configuration path.
    ///
    /// `override_user` names the run-as user whose home replaces a bare `~`.
    /// A user embedded in the path (`~bob`) always takes precedence over it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `raw` cannot be represented in the filesystem charset
    /// - `raw` is empty, or is a plain relative path while absoluteness is enforced
    /// - `override_user` or an embedded user does not exist
    /// - the current user's home directory cannot be determined
    pub fn resolve(
        &self,
        raw: &str,
        override_user: Option<&str>,
    ) -> Result<ResolvedPath, PathError> {
        let encoded = self
            .encoder
            .to_native(raw)
            .map_err(|e| encoding_failed(raw, e))?;

        match PathForm::classify(raw) {
            PathForm::CurrentHome { remainder } => match override_user {
                Some(user) => {
                    let identity = self.identity.lookup_user(user).ok_or_else(|| {
                        PathError::UnknownOverrideUser {
                            user: user.to_string(),
                        }
                    })?;
                    self.expand(
                        raw,
                        identity.into_home(),
                        remainder,
                        HomeExpansion::OverrideUser(user.to_string()),
                    )
                }
                None => {
                    let home = self
                        .home
                        .current_user_home()
                        .ok_or(PathError::UnknownHomeDirectory)?;
                    self.expand(raw, home, remainder, HomeExpansion::CurrentUser)
                }
            },
            PathForm::UserHome { user, remainder } => {
                let identity =
                    self.identity
                        .lookup_user(user)
                        .ok_or_else(|| PathError::UnknownEmbeddedUser {
                            user: user.to_string(),
                        })?;
                self.expand(
                    raw,
                    identity.into_home(),
                    remainder,
                    HomeExpansion::EmbeddedUser(user.to_string()),
                )
            }
            PathForm::Plain => {
                self.check_absolute(raw, &encoded)?;
                Ok(ResolvedPath::new(
                    encoded.into_path_buf(),
                    raw,
                    HomeExpansion::None,
                ))
            }
        }
    }

    fn expand(
        &self,
        raw: &str,
        home: EncodedPath,
        remainder: &str,
        expansion: HomeExpansion,
    ) -> Result<ResolvedPath, PathError> {
        let joined = join(home, remainder, self.encoder.as_ref())
            .map_err(|e| encoding_failed(raw, e))?;
        // a relative home directory must not leak out as a relative result
        self.check_absolute(raw, &joined)?;
        Ok(ResolvedPath::new(joined.into_path_buf(), raw, expansion))
    }

    fn check_absolute(&self, raw: &str, path: &EncodedPath) -> Result<(), PathError> {
        let empty = path.as_path().as_os_str().is_empty();
        if empty || (self.enforce_absolute && !path.as_path().is_absolute()) {
            return Err(PathError::NotAbsolutePath {
                raw: raw.to_string(),
            });
        }
        Ok(())
    }
}

fn encoding_failed(raw: &str, err: EncodingError) -> PathError {
    PathError::EncodingConversionFailed {
        raw: raw.to_string(),
        charset: err.charset,
    }
}
