use std::path::{Path, PathBuf};

use sealbox_core::KdfParams;
use serde::{Deserialize, Serialize};

use crate::errors::CliError;

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SealboxConfig {
    #[serde(default)]
    pub kdf: KdfParams,
}

/// Resolve and load the config.
///
/// An explicit path must exist. The default XDG location is optional and
/// falls back to built-in defaults when absent.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<SealboxConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(CliError::not_found(
                format!("Config file not found: {}", path.display()),
                "Hint: pass an existing file to --config or unset SEALBOX_CONFIG.",
            )
            .into());
        }
        return read_config(path);
    }

    let path = default_config_path()?;
    if path.exists() {
        read_config(&path)
    } else {
        Ok(SealboxConfig::default())
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<SealboxConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    parse_config(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

fn parse_config(contents: &str) -> anyhow::Result<SealboxConfig> {
    let config: SealboxConfig = toml::from_str(contents)?;
    config.kdf.validate()?;
    Ok(config)
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("sealbox"));
        }
    }
    Ok(home_dir()?.join(".config").join("sealbox"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
