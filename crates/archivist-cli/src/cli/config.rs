use std::path::Path;

use anyhow::{Context, Result};
use archivist_core::ViewerConfig;

/// Load viewer config from a JSON file (camelCase keys: baseUrl, timeoutSecs)
pub fn load_config_file(path: &Path) -> Result<ViewerConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: ViewerConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(config)
}

/// File values first, then command-line overrides on top.
pub fn load_config(path: Option<&Path>, overrides: ViewerConfig) -> Result<ViewerConfig> {
    let base = match path {
        Some(path) => load_config_file(path)?,
        None => ViewerConfig::default(),
    };
    Ok(base.merge(overrides))
}
