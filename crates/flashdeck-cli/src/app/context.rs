//! Application context for the Flashdeck CLI.
//!
//! Provides a unified context that combines CLI arguments with the
//! lazily-loaded config file.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use crate::cli::Cli;
use crate::config::FlashdeckConfig;
use crate::ui::UiPreferences;

use super::resolver::{load_config, resolve_card_path, resolve_config_source};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<FlashdeckConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Get the config file, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&FlashdeckConfig> {
        self.config.get_or_try_init(|| {
            let source = resolve_config_source()?;
            tracing::debug!(path = %source.path().display(), "loading config");
            load_config(&source)
        })
    }

    /// Card file to import at startup, if any.
    pub fn import_path(&self) -> anyhow::Result<Option<PathBuf>> {
        let config = self.config()?;
        Ok(resolve_card_path(
            self.cli.import.as_deref(),
            config.files.import.as_deref(),
        ))
    }

    /// Card file to export on exit, if any.
    pub fn export_path(&self) -> anyhow::Result<Option<PathBuf>> {
        let config = self.config()?;
        Ok(resolve_card_path(
            self.cli.export.as_deref(),
            config.files.export.as_deref(),
        ))
    }

    /// UI flags merged with the `[ui]` config section.
    pub fn ui_preferences(&self) -> anyhow::Result<UiPreferences> {
        let config = self.config()?;
        Ok(UiPreferences {
            plain: self.cli.plain,
            no_color: self.cli.no_color,
            ascii: self.cli.ascii,
            color: config.ui.color,
            unicode: config.ui.unicode,
        })
    }
}
