use crate::cli::{ConfigCommands, OutputFormat};
use crate::config::{config_paths, Config};
use anyhow::{Context, Result};
use std::path::Path;

/// Handle config commands; these never contact the server
pub fn handle_config(
    action: &ConfigCommands,
    config_path: Option<&Path>,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    match action {
        ConfigCommands::Show => {
            let redacted = config.redacted();
            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&redacted)?);
                }
                OutputFormat::Text => {
                    let text = toml::to_string_pretty(&redacted)
                        .context("Failed to render configuration")?;
                    print!("{}", text);
                }
            }
        }
        ConfigCommands::Path => {
            let paths = config_paths(config_path);
            match format {
                OutputFormat::Json => {
                    let entries: Vec<_> = paths
                        .iter()
                        .map(|p| serde_json::json!({ "path": p, "exists": p.exists() }))
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&entries)?);
                }
                OutputFormat::Text => {
                    for path in paths {
                        let marker = if path.exists() { "" } else { " (not found)" };
                        println!("{}{}", path.display(), marker);
                    }
                }
            }
        }
    }
    Ok(())
}
