use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FlashdeckConfig {
    #[serde(default)]
    pub files: FilesSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FilesSection {
    /// Card file imported at startup
    pub import: Option<String>,
    /// Card file exported on exit
    pub export: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UiSection {
    pub color: Option<bool>,
    pub unicode: Option<bool>,
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

/// Read the config file, or defaults if it does not exist.
pub fn read_config_or_default(path: &Path) -> anyhow::Result<FlashdeckConfig> {
    if !path.exists() {
        return Ok(FlashdeckConfig::default());
    }
    read_config(path)
}

pub fn read_config(path: &Path) -> anyhow::Result<FlashdeckConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("flashdeck"));
        }
    }
    Ok(home_dir()?.join(".config").join("flashdeck"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
