//! Resolution of the configured path table.

use crate::config::schema::Config;
use crate::error::{PathError, Result};
use crate::path::{PathResolver, ResolvedPath};

/// The outcome of resolving one named path setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfiguredPath {
    /// Name of the setting.
    pub name: String,
    /// Raw text from the configuration.
    pub raw: String,
    /// The resolved path, or why it could not be resolved.
    pub result: std::result::Result<ResolvedPath, PathError>,
}

impl ConfiguredPath {
    /// Whether the setting resolved successfully.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Resolve every path setting in `config`, in name order.
///
/// Failures are reported per entry; one bad setting does not stop the rest.
/// The run-as user of `config` supplies the home for bare `~`.
#[must_use]
pub fn resolve_configured_paths(config: &Config, resolver: &PathResolver) -> Vec<ConfiguredPath> {
    config
        .paths
        .iter()
        .map(|(name, raw)| {
            let result = resolver.resolve(raw, config.override_user());
            match &result {
                Ok(resolved) => {
                    log::debug!("{name}: {raw} -> {}", resolved.path().display());
                }
                Err(e) => log::debug!("{name}: {e}"),
            }
            ConfiguredPath {
                name: name.clone(),
                raw: raw.clone(),
                result,
            }
        })
        .collect()
}

/// Resolve a single named setting.
///
/// Returns `Ok(None)` if the setting is absent.
///
/// # Errors
///
/// Returns [`Error::Path`](crate::Error::Path) if the setting cannot be
/// resolved.
pub fn resolve_setting(
    config: &Config,
    resolver: &PathResolver,
    name: &str,
) -> Result<Option<ResolvedPath>> {
    let Some(raw) = config.path_setting(name) else {
        return Ok(None);
    };

    Ok(Some(resolver.resolve(raw, config.override_user())?))
}
