//! Configuration module
//!
//! Handles loading and saving of quire.toml configuration files.
//! Falls back to the Jekyll layout (`_drafts`, `_posts`, `_templates`)
//! when no configuration file is present.

mod types;

#[allow(unused_imports)]
pub use types::{Config, Templates};

use crate::error::{QuireError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "quire.toml";

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        QuireError::Config(format!(
            "Cannot read config from '{}': {}. Run 'quire init' to create one.",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Resolve the configuration for a command.
///
/// An explicit path must exist. Without one, `quire.toml` in the working
/// directory is used when present, otherwise the defaults apply.
pub fn resolve(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => load(&path),
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                load(&default_path)
            } else {
                Ok(Config::default())
            }
        }
    }
}

/// Save configuration to a TOML file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)
        .map_err(|e| QuireError::Config(format!("Failed to serialize config: {}", e)))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, toml)?;
    Ok(())
}
