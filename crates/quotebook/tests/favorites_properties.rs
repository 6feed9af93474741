//! Property-based tests for the favorites engine.
//!
//! Random toggle/remove sequences against a small catalog, checking the
//! capacity, uniqueness and persistence invariants after every step.

use proptest::prelude::*;
use std::collections::HashSet;

use quotebook::config::favorites::STORAGE_KEY;
use quotebook::config::FavoritesConfig;
use quotebook::favorites::{FavoritesStore, ToggleOutcome};
use quotebook::quote::{Category, Quote, QuoteCatalog, QuoteId};
use quotebook::storage::{KeyValueStore, MemoryStore};

// =============================================================================
// Generators
// =============================================================================

#[derive(Debug, Clone)]
enum Action {
    Toggle(u64),
    Remove(u64),
}

const CATALOG_SIZE: u64 = 8;

fn catalog() -> QuoteCatalog {
    let labels = ["Leadership", "Empathy", "Motivation", "Learning", "Success", "Empowerment"];
    QuoteCatalog::from_quotes(
        (1..=CATALOG_SIZE)
            .map(|id| {
                Quote::new(id, format!("Quote {id}"), "Author")
                    .with_category(labels[(id as usize) % labels.len()])
                    .with_category(labels[(id as usize * 3) % labels.len()])
            })
            .collect(),
    )
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => (1..=CATALOG_SIZE).prop_map(Action::Toggle),
        1 => (1..=CATALOG_SIZE).prop_map(Action::Remove),
    ]
}

fn arb_category() -> impl Strategy<Value = Category> {
    proptest::sample::select(Category::ALL.to_vec())
}

fn ids(store: &FavoritesStore) -> Vec<QuoteId> {
    store.list().iter().map(|q| q.id).collect()
}

fn persisted_ids(store: &FavoritesStore) -> Vec<QuoteId> {
    match store.storage().get(STORAGE_KEY).unwrap() {
        Some(raw) => serde_json::from_str::<Vec<Quote>>(&raw)
            .unwrap()
            .into_iter()
            .map(|q| q.id)
            .collect(),
        None => Vec::new(),
    }
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Size never exceeds the cap and ids stay unique, whatever the sequence.
    #[test]
    fn prop_capacity_and_uniqueness_hold(
        max_faves in 1usize..=5,
        actions in proptest::collection::vec(arb_action(), 0..60),
    ) {
        let catalog = catalog();
        let config = FavoritesConfig::default().with_max_faves(max_faves);
        let mut store = FavoritesStore::new(Box::new(MemoryStore::new()), config);

        for action in actions {
            match action {
                Action::Toggle(id) => { store.toggle(QuoteId(id), &catalog).unwrap(); }
                Action::Remove(id) => { store.remove(QuoteId(id)); }
            }
            prop_assert!(store.len() <= max_faves);
            let unique: HashSet<_> = ids(&store).into_iter().collect();
            prop_assert_eq!(unique.len(), store.len());
        }
    }

    /// Storage always mirrors the in-memory list, by id and in order.
    #[test]
    fn prop_persisted_matches_memory(
        actions in proptest::collection::vec(arb_action(), 1..40),
    ) {
        let catalog = catalog();
        let mut store = FavoritesStore::new(Box::new(MemoryStore::new()), FavoritesConfig::default());
        let mut mutated = false;

        for action in actions {
            let changed = match action {
                Action::Toggle(id) => store.toggle(QuoteId(id), &catalog).unwrap().is_mutation(),
                Action::Remove(id) => store.remove(QuoteId(id)),
            };
            mutated |= changed;
            if mutated {
                prop_assert_eq!(persisted_ids(&store), ids(&store));
            }
        }

        let raw = store.storage().get(STORAGE_KEY).unwrap().unwrap_or_default();
        let reloaded = FavoritesStore::hydrate(
            Box::new(MemoryStore::with_entry(STORAGE_KEY, raw)),
            FavoritesConfig::default(),
        );
        prop_assert_eq!(ids(&reloaded), ids(&store));
    }

    /// An `Added` toggle followed by a second toggle restores the set.
    #[test]
    fn prop_toggle_is_its_own_inverse(
        setup in proptest::collection::vec(1..=CATALOG_SIZE, 0..6),
        id in 1..=CATALOG_SIZE,
    ) {
        let catalog = catalog();
        let mut store = FavoritesStore::new(Box::new(MemoryStore::new()), FavoritesConfig::default());
        for s in setup {
            store.toggle(QuoteId(s), &catalog).unwrap();
        }

        let before = ids(&store);
        let first = store.toggle(QuoteId(id), &catalog).unwrap();
        let second = store.toggle(QuoteId(id), &catalog).unwrap();

        match first {
            ToggleOutcome::Added => {
                prop_assert_eq!(second, ToggleOutcome::Removed);
                prop_assert_eq!(ids(&store), before);
            }
            ToggleOutcome::Removed => {
                prop_assert_eq!(second, ToggleOutcome::Added);
                let mut expected: Vec<_> = before.into_iter().filter(|q| *q != QuoteId(id)).collect();
                expected.push(QuoteId(id));
                prop_assert_eq!(ids(&store), expected);
            }
            ToggleOutcome::CapacityReached => {
                prop_assert_eq!(second, ToggleOutcome::CapacityReached);
                prop_assert_eq!(ids(&store), before);
            }
        }
    }

    /// Removing twice is the same as removing once.
    #[test]
    fn prop_remove_is_idempotent(
        setup in proptest::collection::vec(1..=CATALOG_SIZE, 0..6),
        id in 1..=CATALOG_SIZE,
    ) {
        let catalog = catalog();
        let mut store = FavoritesStore::new(Box::new(MemoryStore::new()), FavoritesConfig::default());
        for s in setup {
            store.toggle(QuoteId(s), &catalog).unwrap();
        }

        store.remove(QuoteId(id));
        let once = ids(&store);
        prop_assert!(!store.remove(QuoteId(id)));
        prop_assert_eq!(ids(&store), once);
    }

    /// Filtering yields exactly the matching quotes, in catalog order.
    #[test]
    fn prop_filter_is_exact_subset(category in arb_category()) {
        let catalog = catalog();
        let filtered: Vec<QuoteId> = catalog.filter_by_category(category).iter().map(|q| q.id).collect();
        let expected: Vec<QuoteId> = catalog
            .all()
            .iter()
            .filter(|q| category == Category::All || q.categories.iter().any(|c| c == category.as_str()))
            .map(|q| q.id)
            .collect();
        prop_assert_eq!(filtered, expected);
    }
}
