//! Configuration file handling for the vaultscope CLI
//!
//! Loads `~/.vaultscope/config.toml` (or the file given with `--config`) and
//! resolves it together with flags and the environment.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::{AppConfig, ConfigFile, ConfigOverrides};

/// Get the default configuration file path (~/.vaultscope/config.toml)
pub fn default_config_path() -> Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .context("Unable to determine home directory")?;

    let mut path = PathBuf::from(home);
    path.push(".vaultscope");
    path.push("config.toml");

    Ok(path)
}

/// Load the config file at `path`; a missing file yields an empty config.
pub fn load_config_file(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        debug!("No config file at {}", path.display());
        return Ok(ConfigFile::default());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    debug!("Loaded config file {}", path.display());
    toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve the application configuration.
///
/// An explicit `--config` path must exist; the default path is optional.
pub fn resolve_config(
    config_flag: Option<PathBuf>,
    overrides: &ConfigOverrides,
) -> Result<AppConfig> {
    let file = match config_flag {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            load_config_file(&path)?
        }
        None => match default_config_path() {
            Ok(path) => load_config_file(&path)?,
            Err(_) => ConfigFile::default(),
        },
    };

    Ok(AppConfig::from_env(overrides, &file))
}
