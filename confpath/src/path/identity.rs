//! User identity and home directory lookups.
//!
//! The resolver never talks to the system user database directly. It asks an
//! [`IdentityService`] for named users and a [`HomeDirectory`] for the current
//! user, so tests can substitute fixed tables for the real passwd database.

use std::collections::HashMap;

use crate::path::encoding::EncodedPath;

/// A user name paired with its home directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    name: String,
    home: EncodedPath,
}

impl UserIdentity {
    /// Create a new identity.
    ///
    /// # Examples
    ///
    /// ```
    /// use confpath::path::{EncodedPath, UserIdentity};
    ///
    /// let bob = UserIdentity::new("bob", EncodedPath::from_native("/home/bob"));
    /// assert_eq!(bob.name(), "bob");
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, home: EncodedPath) -> Self {
        Self {
            name: name.into(),
            home,
        }
    }

    /// The user name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The user's home directory.
    #[must_use]
    pub fn home(&self) -> &EncodedPath {
        &self.home
    }

    /// Consume the identity, keeping only the home directory.
    #[must_use]
    pub fn into_home(self) -> EncodedPath {
        self.home
    }
}

/// Maps user names to account metadata.
///
/// Implementations may block on a system call.
#[cfg_attr(test, mockall::automock)]
pub trait IdentityService: Send + Sync {
    /// Look up a user by name, returning `None` if no such user exists.
    fn lookup_user(&self, name: &str) -> Option<UserIdentity>;
}

/// Reports the home directory of the user running the process.
#[cfg_attr(test, mockall::automock)]
pub trait HomeDirectory: Send + Sync {
    /// The current user's home directory, if it can be determined.
    fn current_user_home(&self) -> Option<EncodedPath>;
}

/// Identity service backed by the operating system's user database.
///
/// On Unix this queries the passwd database. On other platforms there is no
/// user database to consult, so every lookup reports an unknown user.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemIdentity;

impl IdentityService for SystemIdentity {
    #[cfg(unix)]
    fn lookup_user(&self, name: &str) -> Option<UserIdentity> {
        match nix::unistd::User::from_name(name) {
            Ok(user) => user.map(|u| UserIdentity::new(u.name, EncodedPath::from_native(u.dir))),
            Err(e) => {
                log::debug!("passwd lookup for {name:?} failed: {e}");
                None
            }
        }
    }

    #[cfg(not(unix))]
    fn lookup_user(&self, _name: &str) -> Option<UserIdentity> {
        None
    }
}

/// Current-user home lookup using the `home` crate.
///
/// Honors `HOME` on Unix before falling back to the passwd entry of the
/// effective user.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHome;

impl HomeDirectory for SystemHome {
    fn current_user_home(&self) -> Option<EncodedPath> {
        home::home_dir()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(EncodedPath::from)
    }
}

/// An in-memory identity table.
///
/// # Examples
///
/// ```
/// use confpath::path::{IdentityService, UserTable};
///
/// let users = UserTable::new()
///     .with_user("bob", "/home/bob")
///     .with_user("mpd", "/var/lib/mpd");
///
/// assert_eq!(
///     users.lookup_user("mpd").unwrap().home().as_path(),
///     std::path::Path::new("/var/lib/mpd")
/// );
/// assert!(users.lookup_user("dave").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct UserTable {
    users: HashMap<String, EncodedPath>,
}

impl UserTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user, replacing any previous entry with the same name.
    #[must_use]
    pub fn with_user(mut self, name: impl Into<String>, home: impl Into<EncodedPath>) -> Self {
        self.users.insert(name.into(), home.into());
        self
    }

    /// Number of users in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the table has no users.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl IdentityService for UserTable {
    fn lookup_user(&self, name: &str) -> Option<UserIdentity> {
        self.users
            .get(name)
            .map(|home| UserIdentity::new(name, home.clone()))
    }
}

/// A home directory lookup with a fixed answer.
#[derive(Debug, Clone, Default)]
pub struct FixedHome(Option<EncodedPath>);

impl FixedHome {
    /// Always report `home` as the current user's home directory.
    #[must_use]
    pub fn new(home: impl Into<EncodedPath>) -> Self {
        Self(Some(home.into()))
    }

    /// Never report a home directory.
    #[must_use]
    pub fn unavailable() -> Self {
        Self(None)
    }
}

impl HomeDirectory for FixedHome {
    fn current_user_home(&self) -> Option<EncodedPath> {
        self.0.clone()
    }
}
