//! Selection controller
//!
//! Composes the catalog, the favorites store and the notification channel
//! into the single view consumed by presentation. Derived data
//! (`visible_quotes`) is recomputed on every call; nothing is cached.

use tracing::debug;

use crate::error::{FetchError, Result};
use crate::favorites::{FavoritesStore, ToggleOutcome};
use crate::notification::{Notification, NotificationChannel};
use crate::quote::{Category, Quote, QuoteCatalog, QuoteId, QuoteSource};

pub struct SelectionController {
    catalog: QuoteCatalog,
    favorites: FavoritesStore,
    notifications: NotificationChannel,
    category: Category,
}

impl SelectionController {
    /// Start a session showing every quote
    pub fn new(catalog: QuoteCatalog, favorites: FavoritesStore) -> Self {
        Self {
            catalog,
            favorites,
            notifications: NotificationChannel::new(),
            category: Category::All,
        }
    }

    // === Category ===

    pub fn set_category(&mut self, category: Category) {
        debug!(%category, "category selected");
        self.category = category;
    }

    /// Select a category by label
    ///
    /// Labels outside the vocabulary are rejected and the selection is kept.
    pub fn set_category_label(&mut self, label: &str) -> Result<Category> {
        let category = label.parse::<Category>()?;
        self.set_category(category);
        Ok(category)
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Quotes in the selected category, in catalog order
    pub fn visible_quotes(&self) -> Vec<&Quote> {
        self.catalog.filter_by_category(self.category)
    }

    // === Favorites ===

    pub fn is_favorite(&self, id: QuoteId) -> bool {
        self.favorites.is_favorite(id)
    }

    pub fn favorite_list(&self) -> &[Quote] {
        self.favorites.list()
    }

    /// Toggle a favorite and publish the outcome as a notification
    pub fn toggle(&mut self, id: QuoteId) -> Result<ToggleOutcome> {
        let outcome = self.favorites.toggle(id, &self.catalog)?;
        let notify_on_remove = self.favorites.config().notify_on_remove;
        self.notifications.report(outcome, notify_on_remove);
        Ok(outcome)
    }

    /// Remove a favorite outright (the "x" on a favorites entry)
    pub fn remove(&mut self, id: QuoteId) -> bool {
        let removed = self.favorites.remove(id);
        if removed {
            let notify_on_remove = self.favorites.config().notify_on_remove;
            self.notifications.report(ToggleOutcome::Removed, notify_on_remove);
        }
        removed
    }

    // === Notification ===

    pub fn notification(&self) -> Option<&Notification> {
        self.notifications.active()
    }

    pub fn dismiss_notification(&mut self) {
        self.notifications.clear();
    }

    // === Catalog ===

    /// Fetch the catalog synchronously from `source`
    pub fn load_catalog(&mut self, source: &dyn QuoteSource) -> Result<usize> {
        self.catalog.load(source)
    }

    /// Apply a fetch result produced off the event thread
    pub fn ingest_catalog(&mut self, result: std::result::Result<Vec<Quote>, FetchError>) -> Result<usize> {
        self.catalog.ingest(result)
    }

    pub fn catalog(&self) -> &QuoteCatalog {
        &self.catalog
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }
}
