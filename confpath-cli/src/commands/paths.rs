//! Command to resolve every path setting of the configuration.

use crate::error::CliError;
use crate::utils::{prepare, GlobalOptions, OutputFormat};
use clap::Args;
use confpath::config::{resolve_configured_paths, ConfiguredPath};
use std::io::Write;

/// Resolve all configured path settings.
#[derive(Args)]
pub struct PathsCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: OutputFormat,
}

impl PathsCommand {
    /// Execute the paths command.
    ///
    /// Every entry is processed; the command fails afterwards if any entry
    /// did not resolve.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = prepare(global)?;
        let entries = resolve_configured_paths(&config, &config.path_resolver());

        if entries.is_empty() {
            log::info!("no path settings configured");
        }

        match self.format {
            OutputFormat::Text => format_as_text(&entries)?,
            OutputFormat::Json => format_as_json(&entries)?,
        }

        let failed = entries.iter().filter(|e| !e.is_ok()).count();
        if failed > 0 {
            return Err(CliError::SemanticFailure(format!(
                "{failed} of {} configured paths failed to resolve",
                entries.len()
            )));
        }

        Ok(())
    }
}

/// Print `name = path` lines; failures go to stderr.
fn format_as_text(entries: &[ConfiguredPath]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    for entry in entries {
        match &entry.result {
            Ok(resolved) => writeln!(handle, "{} = {}", entry.name, resolved.path().display())?,
            Err(e) => eprintln!("Error: {}: {e}", entry.name),
        }
    }

    Ok(())
}

/// Print a JSON array with one object per setting.
fn format_as_json(entries: &[ConfiguredPath]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let json_data: Vec<serde_json::Value> = entries
        .iter()
        .map(|entry| match &entry.result {
            Ok(resolved) => serde_json::json!({
                "name": entry.name,
                "raw": entry.raw,
                "path": resolved.path().display().to_string(),
                "expansion": resolved.expansion().to_string(),
            }),
            Err(e) => serde_json::json!({
                "name": entry.name,
                "raw": entry.raw,
                "error": e.to_string(),
            }),
        })
        .collect();

    serde_json::to_writer_pretty(&mut handle, &json_data)?;
    writeln!(handle)?;

    Ok(())
}
