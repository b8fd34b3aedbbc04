//! Common test utilities for integration tests.
//!
//! This module provides fixture builders for testing the confpath library
//! without touching the real user database.

use confpath::path::{FixedHome, UserTable};
use confpath::PathResolver;

/// Home directory of the simulated current user.
#[allow(dead_code)]
pub const CURRENT_HOME: &str = "/home/alice";

/// A user table with a handful of well-known accounts.
#[allow(dead_code)]
pub fn user_table() -> UserTable {
    UserTable::new()
        .with_user("alice", CURRENT_HOME)
        .with_user("bob", "/home/bob")
        .with_user("mpd", "/var/lib/mpd")
        .with_user("root", "/root")
}

/// Creates a resolver backed by [`user_table`] and [`CURRENT_HOME`].
#[allow(dead_code)]
pub fn test_resolver(enforce_absolute: bool) -> PathResolver {
    PathResolver::new()
        .with_identity_service(user_table())
        .with_home_directory(FixedHome::new(CURRENT_HOME))
        .with_enforce_absolute(enforce_absolute)
}
