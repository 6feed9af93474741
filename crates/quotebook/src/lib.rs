//! Quotebook: quote catalog and favorites engine
//!
//! Category filtering over a fetched quote catalog, a bounded and persisted
//! set of favorite quotes, and a single-slot notification surface, composed
//! by [`selection::SelectionController`].
//!
//! ## Quick start
//!
//! ```
//! use quotebook::config::FavoritesConfig;
//! use quotebook::favorites::{FavoritesStore, ToggleOutcome};
//! use quotebook::quote::{Category, Quote, QuoteCatalog, QuoteId};
//! use quotebook::selection::SelectionController;
//! use quotebook::storage::MemoryStore;
//!
//! let favorites = FavoritesStore::hydrate(Box::new(MemoryStore::new()), FavoritesConfig::default());
//! let mut selection = SelectionController::new(QuoteCatalog::new(), favorites);
//!
//! selection.ingest_catalog(Ok(vec![
//!     Quote::new(1, "Dream big", "A").with_category("Success"),
//!     Quote::new(2, "Walk in their shoes", "B").with_category("Empathy"),
//! ]))?;
//!
//! assert_eq!(selection.toggle(QuoteId(2))?, ToggleOutcome::Added);
//! assert_eq!(selection.notification().map(|n| n.text.as_str()), Some("Added to Favorites!"));
//!
//! selection.set_category(Category::Empathy);
//! let visible = selection.visible_quotes();
//! assert_eq!(visible.len(), 1);
//! assert!(selection.is_favorite(visible[0].id));
//! # Ok::<(), quotebook::error::QuoteError>(())
//! ```

pub mod config;
pub mod error;
pub mod favorites;
pub mod notification;
pub mod quote;
pub mod selection;
pub mod storage;
