//! Command to resolve a single raw configuration path.

use crate::error::CliError;
use crate::utils::{prepare, GlobalOptions, OutputFormat};
use clap::Args;
use confpath::{Charset, ResolvedPath};
use std::io::Write;

/// Resolve a raw path the way a configuration setting would be resolved.
#[derive(Args)]
pub struct ResolveCommand {
    /// Raw path text, e.g. `~/music` or `~mpd/database`
    #[arg(value_name = "RAW")]
    pub raw: String,

    /// Run-as user whose home replaces a bare `~`
    #[arg(long, value_name = "NAME")]
    pub user: Option<String>,

    /// Accept relative plain paths
    #[arg(long)]
    pub no_enforce_absolute: bool,

    /// Filesystem charset (UTF-8, ISO-8859-1, ASCII)
    #[arg(long, value_name = "NAME")]
    pub charset: Option<Charset>,

    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: OutputFormat,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = prepare(global)?;

        let mut resolver = config.path_resolver();
        if let Some(charset) = self.charset {
            resolver = resolver.with_charset(charset);
        }
        if self.no_enforce_absolute {
            resolver = resolver.with_enforce_absolute(false);
        }

        let user = self.user.as_deref().or(config.override_user());
        let resolved = resolver.resolve(&self.raw, user)?;
        log::info!(
            "resolved {} ({} expansion)",
            resolved.original(),
            resolved.expansion()
        );

        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        match self.format {
            OutputFormat::Text => writeln!(handle, "{}", resolved.path().display())?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut handle, &resolved_json(&resolved))?;
                writeln!(handle)?;
            }
        }

        Ok(())
    }
}

fn resolved_json(resolved: &ResolvedPath) -> serde_json::Value {
    serde_json::json!({
        "raw": resolved.original(),
        "path": resolved.path().display().to_string(),
        "expansion": resolved.expansion().to_string(),
        "user": resolved.expansion().user(),
    })
}
