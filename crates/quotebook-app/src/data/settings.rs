//! Application settings management
//!
//! User preferences that survive restarts. The selected category is
//! deliberately absent: it lives only for a session.

use crate::config::providers::DEFAULT_QUOTES_URL;
use crate::data::storage;
use crate::error::{AppError, Result};
use quotebook::config::favorites::DEFAULT_MAX_FAVES;
use quotebook::config::FavoritesConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Settings data file name
pub const SETTINGS_FILE: &str = "settings.json";

/// Settings file format version for migrations
const SETTINGS_VERSION: u32 = 1;

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// File format version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Where the quote list is fetched from
    #[serde(default = "default_quotes_url")]
    pub quotes_url: String,

    /// Favorites cap
    #[serde(default = "default_max_faves")]
    pub max_faves: usize,

    /// Show a notification when a favorite is removed
    #[serde(default)]
    pub notify_on_remove: bool,
}

fn default_version() -> u32 {
    SETTINGS_VERSION
}

fn default_quotes_url() -> String {
    DEFAULT_QUOTES_URL.to_string()
}

fn default_max_faves() -> usize {
    DEFAULT_MAX_FAVES
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            quotes_url: default_quotes_url(),
            max_faves: default_max_faves(),
            notify_on_remove: false,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from `dir/settings.json`
    ///
    /// On first run the file is absent; defaults are written there so the
    /// user has something to edit. A failed write is logged, not fatal.
    pub fn load_in(dir: &Path) -> Result<Self> {
        let path = dir.join(SETTINGS_FILE);
        if path.exists() {
            return Self::load_from(&path);
        }

        let settings = Self::default();
        match settings.save_to(&path) {
            Ok(()) => info!(path = %path.display(), "wrote default settings"),
            Err(e) => warn!(path = %path.display(), error = %e, "could not write default settings"),
        }
        Ok(settings)
    }

    /// Load settings from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let settings = storage::load_from::<Settings>(path)?.unwrap_or_default();
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;
        storage::save_to(path, self)
    }

    /// Reject values the engine cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.max_faves == 0 {
            return Err(AppError::Config("max_faves must be at least 1".to_string()));
        }
        if self.quotes_url.trim().is_empty() {
            return Err(AppError::Config("quotes_url must not be empty".to_string()));
        }
        Ok(())
    }

    /// Engine options derived from these settings
    pub fn favorites_config(&self) -> FavoritesConfig {
        FavoritesConfig::default()
            .with_max_faves(self.max_faves)
            .with_notify_on_remove(self.notify_on_remove)
    }
}
