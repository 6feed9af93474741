//! Shared application state and commands
//!
//! `AppCommand` is the command type sent by any frontend (CLI, shell).
//! `AppSnapshot` is the state frontends read back.

use crossbeam_channel::Sender;

use quotebook::error::FetchError;
use quotebook::notification::Notification;
use quotebook::quote::{Category, Quote, QuoteId};

/// Commands sent by any frontend
#[derive(Debug)]
pub enum AppCommand {
    // Selection
    SetCategory(Category),

    // Favorites
    ToggleFavorite(QuoteId),
    RemoveFavorite(QuoteId),
    DismissNotification,

    // Catalog
    ReloadCatalog,

    /// Reply once every earlier command has been applied and published
    Sync(Sender<()>),

    // Shutdown the controller
    Shutdown,

    // Internal: catalog fetched on worker thread (not sent by frontends)
    InternalCatalogLoaded {
        generation: u64,
        result: Result<Vec<Quote>, FetchError>,
    },
}

/// Snapshot of app state, shared between controller and frontends
#[derive(Clone, Debug, Default)]
pub struct AppSnapshot {
    pub category: Category,
    /// Quotes in the selected category
    pub visible: Vec<Quote>,
    /// Favorites in insertion order
    pub favorites: Vec<Quote>,
    pub max_faves: usize,
    pub notification: Option<Notification>,
    /// True while a catalog fetch is in flight
    pub is_loading: bool,
    /// Whether any catalog fetch has succeeded
    pub catalog_loaded: bool,
    pub catalog_size: usize,
    /// Last error from a catalog load or a rejected command
    pub last_error: Option<String>,
}

impl AppSnapshot {
    pub fn is_favorite(&self, id: QuoteId) -> bool {
        self.favorites.iter().any(|q| q.id == id)
    }
}
