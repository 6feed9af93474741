//! Configuration constants for the quotebook engine

/// Favorites-related configuration
pub mod favorites {
    /// Default cap on the number of favorite quotes
    pub const DEFAULT_MAX_FAVES: usize = 3;

    /// Storage key holding the serialized favorites list
    pub const STORAGE_KEY: &str = "favoriteQuotes";
}

/// User-facing notification texts
pub mod messages {
    pub const ADDED: &str = "Added to Favorites!";

    pub const CAPACITY_REACHED: &str =
        "Max number of favorite quotes reached. Remove one to add another.";

    /// Only shown when removal notifications are enabled
    pub const REMOVED: &str = "Removed from Favorites.";
}

/// Runtime options for the favorites store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FavoritesConfig {
    /// Maximum number of favorites held at once
    pub max_faves: usize,
    /// Emit a notification when a favorite is toggled off
    pub notify_on_remove: bool,
}

impl FavoritesConfig {
    pub fn with_max_faves(mut self, max_faves: usize) -> Self {
        self.max_faves = max_faves;
        self
    }

    pub fn with_notify_on_remove(mut self, enabled: bool) -> Self {
        self.notify_on_remove = enabled;
        self
    }
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self {
            max_faves: favorites::DEFAULT_MAX_FAVES,
            notify_on_remove: false,
        }
    }
}
