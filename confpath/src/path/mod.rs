//! Resolution of home-relative configuration paths.
//!
//! This module turns path settings read from a configuration file into
//! absolute, filesystem-native paths.
//!
//! # Forms
//!
//! A raw path takes one of three forms, decided by its leading characters:
//!
//! - `~` or `~/rest`: relative to the home of the configured run-as user, or
//!   of the current process user when no run-as user is configured.
//! - `~user` or `~user/rest`: relative to the home of `user`. An embedded user
//!   always takes precedence over the run-as user.
//! - anything else: used as is, and required to be absolute unless
//!   enforcement is switched off with
//!   [`PathResolver::with_enforce_absolute`].
//!
//! # Collaborators
//!
//! The resolver consults three injected services: a [`PathEncoder`] for the
//! filesystem charset, an [`IdentityService`] for named users and a
//! [`HomeDirectory`] for the current user. The system implementations are
//! [`Charset`], [`SystemIdentity`] and [`SystemHome`]; [`UserTable`] and
//! [`FixedHome`] replace them in tests.
//!
//! # Examples
//!
//! ```
//! use confpath::path::{FixedHome, HomeExpansion, PathResolver, UserTable};
//! use std::path::Path;
//!
//! let resolver = PathResolver::new()
//!     .with_identity_service(UserTable::new().with_user("mpd", "/var/lib/mpd"))
//!     .with_home_directory(FixedHome::new("/home/alice"))
//!     .with_enforce_absolute(true);
//!
//! let db = resolver.resolve("~/database", Some("mpd")).unwrap();
//! assert_eq!(db.path(), Path::new("/var/lib/mpd/database"));
//! assert_eq!(db.expansion(), &HomeExpansion::OverrideUser("mpd".to_string()));
//! ```

pub mod encoding;
pub mod form;
pub mod identity;
pub mod join;
pub mod resolver;
mod types;

// Re-export key types
pub use encoding::{Charset, EncodedPath, EncodingError, PathEncoder};
pub use form::PathForm;
pub use identity::{
    FixedHome, HomeDirectory, IdentityService, SystemHome, SystemIdentity, UserIdentity,
    UserTable,
};
pub use resolver::{platform_enforces_absolute, PathResolver};
pub use types::{HomeExpansion, ResolvedPath};
