use clap::{Parser, ValueEnum};
use tracing::warn;

use crate::domain::ConfigMap;

#[derive(Debug, Parser)]
#[command(
    name = "param-config",
    about = "Fetch named parameters from the store and print them as application configuration"
)]
pub struct Cli {
    /// Parameter name to fetch; repeat the flag for multiple names
    #[arg(short = 'n', long = "name", required = true)]
    pub names: Vec<String>,

    /// Skip decryption of SecureString parameters
    #[arg(long)]
    pub no_decrypt: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Fail when any requested name cannot be resolved
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Env,
}

/// Decides what to do with names the store could not resolve: strict mode
/// fails the run, otherwise they are logged and skipped.
pub fn check_unresolved(invalid_parameters: &[String], strict: bool) -> anyhow::Result<()> {
    if invalid_parameters.is_empty() {
        return Ok(());
    }

    if strict {
        anyhow::bail!("Unresolved parameters: {}", invalid_parameters.join(", "));
    }

    warn!(
        "Skipping unresolved parameters: {}",
        invalid_parameters.join(", ")
    );
    Ok(())
}

pub fn render(config_map: &ConfigMap, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(config_map)?),
        OutputFormat::Env => {
            let mut entries: Vec<(&str, &str)> = config_map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            let lines: Vec<String> = entries
                .iter()
                .map(|(name, value)| format!("{}={}", name, value))
                .collect();
            Ok(lines.join("\n"))
        }
    }
}
