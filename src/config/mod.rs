mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config = parse_config(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    for warning in validate_config(&config) {
        tracing::warn!("{}", warning);
    }

    Ok(config)
}

/// Parse configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = ["./portfolio.toml", "~/.config/portfolio/config.toml"];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    tracing::debug!("No config file found, using defaults");
    Ok(Config::default())
}

/// Collect warnings for suspicious but accepted configuration. Nothing here
/// is fatal: the factory is the only gate on gallery entries.
fn validate_config(config: &Config) -> Vec<String> {
    let mut warnings = Vec::new();

    let Some(entries) = &config.gallery else {
        return warnings;
    };

    if entries.is_empty() {
        warnings.push("gallery is configured but has no entries".into());
    }

    for (i, entry) in entries.iter().enumerate() {
        if entry.kind.as_deref().map_or(true, str::is_empty) {
            warnings.push(format!(
                "gallery[{}] ({:?}) has no kind and will be skipped",
                i, entry.title
            ));
        }
    }

    warnings
}
