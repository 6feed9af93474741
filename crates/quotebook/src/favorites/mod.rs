//! Favorite quotes
//!
//! Bounded, deduplicated, ordered favorites with write-through persistence.

pub mod store;

pub use store::{FavoritesStore, ToggleOutcome};
