//! Path resolution for the config file and card files.

use std::path::{Path, PathBuf};

use crate::config::{default_config_path, read_config, read_config_or_default, FlashdeckConfig};
use crate::errors::CliError;

/// Where the config file comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named by FLASHDECK_CONFIG; must exist
    Explicit(PathBuf),
    /// The XDG default; optional
    Default(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> &Path {
        match self {
            ConfigSource::Explicit(path) | ConfigSource::Default(path) => path,
        }
    }
}

/// Resolve the config file path, checking FLASHDECK_CONFIG env var first.
pub fn resolve_config_source() -> anyhow::Result<ConfigSource> {
    if let Ok(value) = std::env::var("FLASHDECK_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(ConfigSource::Explicit(PathBuf::from(value)));
        }
    }
    Ok(ConfigSource::Default(default_config_path()?))
}

/// Load the config named by `source`.
///
/// A missing default config means defaults; a missing explicit config is
/// an error.
pub fn load_config(source: &ConfigSource) -> anyhow::Result<FlashdeckConfig> {
    match source {
        ConfigSource::Explicit(path) => {
            if !path.exists() {
                return Err(CliError::not_found(
                    missing_config_message(path),
                    "Hint: Unset FLASHDECK_CONFIG to use the default location.",
                )
                .into());
            }
            read_config(path).map_err(|e| CliError::invalid_input(e.to_string()).into())
        }
        ConfigSource::Default(path) => {
            read_config_or_default(path).map_err(|e| CliError::invalid_input(e.to_string()).into())
        }
    }
}

/// Pick the first non-blank value: flag or environment, then config.
pub fn resolve_card_path(flag: Option<&str>, config: Option<&str>) -> Option<PathBuf> {
    flag.or(config)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Error message when an explicit config file is missing.
pub fn missing_config_message(config_path: &Path) -> String {
    format!("No config file found at {}", config_path.display())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_flag_beats_config() {
        let path = resolve_card_path(Some("flag.txt"), Some("config.txt"));
        assert_eq!(path, Some(PathBuf::from("flag.txt")));
    }

    #[test]
    fn test_config_fallback() {
        let path = resolve_card_path(None, Some("config.txt"));
        assert_eq!(path, Some(PathBuf::from("config.txt")));
    }

    #[test]
    fn test_blank_is_none() {
        assert_eq!(resolve_card_path(Some("  "), None), None);
        assert_eq!(resolve_card_path(None, None), None);
    }

    #[test]
    fn test_missing_explicit_config_is_not_found() {
        let dir = tempdir().unwrap();
        let source = ConfigSource::Explicit(dir.path().join("nope.toml"));
        let err = load_config(&source).unwrap_err();
        let cli_err = err.downcast_ref::<CliError>().expect("CliError");
        assert!(matches!(cli_err, CliError::NotFound { .. }));
    }

    #[test]
    fn test_missing_default_config_is_ok() {
        let dir = tempdir().unwrap();
        let source = ConfigSource::Default(dir.path().join("config.toml"));
        let config = load_config(&source).unwrap();
        assert!(config.files.export.is_none());
    }

    #[test]
    fn test_malformed_config_is_invalid_input() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not = [valid").unwrap();
        let err = load_config(&ConfigSource::Default(path)).unwrap_err();
        let cli_err = err.downcast_ref::<CliError>().expect("CliError");
        assert!(matches!(cli_err, CliError::InvalidInput(_)));
    }
}
