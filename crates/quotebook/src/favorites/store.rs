//! Favorites store
//!
//! Keeps the favorites list in insertion order and writes the full list of
//! quote records to the key-value store after every change. Persisted
//! favorites are self-contained: reloading them never needs the catalog.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::config::favorites::STORAGE_KEY;
use crate::config::FavoritesConfig;
use crate::error::{QuoteError, Result};
use crate::quote::{Quote, QuoteCatalog, QuoteId};
use crate::storage::KeyValueStore;

/// Result of a toggle attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The quote was appended to the favorites
    Added,
    /// The quote was a favorite and has been removed
    Removed,
    /// The favorites are full; nothing changed
    CapacityReached,
}

impl ToggleOutcome {
    /// Whether the favorites list changed
    pub fn is_mutation(&self) -> bool {
        !matches!(self, ToggleOutcome::CapacityReached)
    }
}

/// Owns the favorites list and its persistence
pub struct FavoritesStore {
    favorites: Vec<Quote>,
    storage: Box<dyn KeyValueStore>,
    config: FavoritesConfig,
    /// Message of the most recent failed write, cleared by the next success
    last_persist_error: Option<String>,
}

impl FavoritesStore {
    /// Create an empty store without reading `storage`
    pub fn new(storage: Box<dyn KeyValueStore>, config: FavoritesConfig) -> Self {
        Self {
            favorites: Vec::new(),
            storage,
            config,
            last_persist_error: None,
        }
    }

    /// Create a store from whatever `storage` holds
    ///
    /// Absent, empty, unreadable or malformed data yields an empty store.
    /// Duplicates and entries past the cap are dropped and the trimmed list
    /// is written back. Hydration never fails.
    pub fn hydrate(storage: Box<dyn KeyValueStore>, config: FavoritesConfig) -> Self {
        let mut store = Self::new(storage, config);
        let persisted = read_persisted(store.storage.as_ref());
        let persisted_len = persisted.len();

        let mut seen = HashSet::new();
        for quote in persisted {
            if store.favorites.len() >= config.max_faves {
                warn!(max = config.max_faves, "persisted favorites exceed capacity, truncating");
                break;
            }
            if seen.insert(quote.id) {
                store.favorites.push(quote);
            } else {
                warn!(id = %quote.id, "dropping duplicate persisted favorite");
            }
        }

        if store.favorites.len() < persisted_len {
            store.persist();
        }

        debug!(count = store.favorites.len(), "favorites hydrated");
        store
    }

    /// Flip membership of `id`
    ///
    /// Removing works for any current favorite. Adding requires the quote to
    /// be in `catalog`; an unknown id is rejected without touching state.
    pub fn toggle(&mut self, id: QuoteId, catalog: &QuoteCatalog) -> Result<ToggleOutcome> {
        if self.remove(id) {
            return Ok(ToggleOutcome::Removed);
        }

        let quote = catalog.get(id).ok_or(QuoteError::UnknownQuote(id))?;

        if self.is_full() {
            debug!(%id, max = self.config.max_faves, "favorites full");
            return Ok(ToggleOutcome::CapacityReached);
        }

        self.favorites.push(quote.clone());
        debug!(%id, count = self.favorites.len(), "favorite added");
        self.persist();
        Ok(ToggleOutcome::Added)
    }

    /// Remove `id` if it is a favorite
    ///
    /// Idempotent. Returns whether anything was removed.
    pub fn remove(&mut self, id: QuoteId) -> bool {
        let before = self.favorites.len();
        self.favorites.retain(|q| q.id != id);
        if self.favorites.len() == before {
            return false;
        }

        debug!(%id, count = self.favorites.len(), "favorite removed");
        self.persist();
        true
    }

    /// Favorites in insertion order
    pub fn list(&self) -> &[Quote] {
        &self.favorites
    }

    pub fn is_favorite(&self, id: QuoteId) -> bool {
        self.favorites.iter().any(|q| q.id == id)
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.favorites.len() >= self.config.max_faves
    }

    pub fn max_faves(&self) -> usize {
        self.config.max_faves
    }

    /// Free slots left before the cap
    pub fn remaining(&self) -> usize {
        self.config.max_faves.saturating_sub(self.favorites.len())
    }

    pub fn config(&self) -> &FavoritesConfig {
        &self.config
    }

    /// Error from the most recent write, if it failed
    pub fn last_persist_error(&self) -> Option<&str> {
        self.last_persist_error.as_deref()
    }

    /// The backing key-value store
    pub fn storage(&self) -> &dyn KeyValueStore {
        self.storage.as_ref()
    }

    /// Write the full list through to storage
    ///
    /// A failed write is logged and remembered; the in-memory change stands.
    fn persist(&mut self) {
        match self.write() {
            Ok(()) => self.last_persist_error = None,
            Err(e) => {
                warn!(error = %e, "failed to persist favorites");
                self.last_persist_error = Some(e.to_string());
            }
        }
    }

    fn write(&mut self) -> Result<()> {
        let json = serde_json::to_string(&self.favorites)?;
        self.storage.set(STORAGE_KEY, &json)
    }
}

/// Read the persisted favorites, treating anything unusable as empty
fn read_persisted(storage: &dyn KeyValueStore) -> Vec<Quote> {
    let raw = match storage.get(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(error = %e, "could not read persisted favorites, starting empty");
            return Vec::new();
        }
    };

    if raw.trim().is_empty() {
        return Vec::new();
    }

    match serde_json::from_str::<Vec<Quote>>(&raw) {
        Ok(quotes) => quotes,
        Err(e) => {
            warn!(error = %e, "persisted favorites are malformed, starting empty");
            Vec::new()
        }
    }
}
