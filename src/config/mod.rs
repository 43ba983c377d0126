//! Configuration module
//!
//! Handles loading and saving of shiplog.toml configuration files.
//! Defines the Config and Site types and the resolution rule: an explicit
//! --config path must exist, while the implicit ./shiplog.toml falls back
//! to built-in defaults when absent.

mod types;

pub use types::{Config, Site};

use crate::error::{Result, ShiplogError};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration file name looked up in the working directory when no
/// --config flag is given
pub const DEFAULT_CONFIG_FILE: &str = "shiplog.toml";

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        ShiplogError::Config(format!(
            "Cannot read config from '{}': {}. Run 'shiplog config init' to create one.",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Resolve the effective configuration for a command.
///
/// An explicit path must exist and parse. Without one, ./shiplog.toml is
/// used when present; otherwise built-in defaults apply, so the tool works
/// in a bare directory with no setup. Resolution never writes anything.
pub fn resolve(explicit: Option<PathBuf>) -> Result<Config> {
    match explicit {
        Some(path) => load(&path),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                load(default_path)
            } else {
                Ok(Config::default())
            }
        }
    }
}

/// Save configuration to a TOML file
pub fn save(config: &Config, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(config)
        .map_err(|e| ShiplogError::Config(format!("Failed to serialize config: {}", e)))?;

    // Create parent directories if needed
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, toml)?;
    Ok(())
}
