//! Quote catalog
//!
//! Holds every quote fetched from the source and answers category queries.

use std::collections::HashSet;

use tracing::{info, warn};

use crate::error::{FetchError, Result};

use super::source::QuoteSource;
use super::types::{Category, Quote, QuoteId};

/// The full set of known quotes, in source order
#[derive(Debug, Default)]
pub struct QuoteCatalog {
    quotes: Vec<Quote>,
    /// Whether at least one fetch has succeeded
    loaded: bool,
}

impl QuoteCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog from quotes already in hand
    pub fn from_quotes(quotes: Vec<Quote>) -> Self {
        let mut catalog = Self::new();
        catalog.replace(quotes);
        catalog
    }

    /// Fetch once from `source` and replace the catalog on success
    ///
    /// On failure the current quotes are left untouched. No retry.
    pub fn load(&mut self, source: &dyn QuoteSource) -> Result<usize> {
        let result = source.fetch();
        self.ingest(result)
    }

    /// Apply the result of a fetch performed elsewhere
    pub fn ingest(&mut self, result: std::result::Result<Vec<Quote>, FetchError>) -> Result<usize> {
        match result {
            Ok(quotes) => {
                let count = self.replace(quotes);
                info!(count, "quote catalog loaded");
                Ok(count)
            }
            Err(e) => {
                warn!(error = %e, kept = self.quotes.len(), "quote catalog load failed");
                Err(e.into())
            }
        }
    }

    /// Swap in a new quote list, skipping records that cannot be filtered
    /// or looked up. The first record with a given id wins.
    fn replace(&mut self, quotes: Vec<Quote>) -> usize {
        let mut seen = HashSet::with_capacity(quotes.len());
        self.quotes = quotes
            .into_iter()
            .filter(|q| {
                if q.categories.is_empty() {
                    warn!(id = %q.id, "skipping quote without categories");
                    return false;
                }
                if !seen.insert(q.id) {
                    warn!(id = %q.id, "skipping duplicate quote id");
                    return false;
                }
                true
            })
            .collect();
        self.loaded = true;
        self.quotes.len()
    }

    /// Quotes shown under `category`, in catalog order
    ///
    /// `Category::All` yields the whole catalog.
    pub fn filter_by_category(&self, category: Category) -> Vec<&Quote> {
        self.quotes.iter().filter(|q| q.matches(category)).collect()
    }

    /// Look up a quote by id
    pub fn get(&self, id: QuoteId) -> Option<&Quote> {
        self.quotes.iter().find(|q| q.id == id)
    }

    pub fn contains(&self, id: QuoteId) -> bool {
        self.get(id).is_some()
    }

    /// Every quote, in catalog order
    pub fn all(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Whether a fetch has ever succeeded
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuoteError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// A source that serves a fixed result and counts calls
    struct MockSource {
        result: std::result::Result<Vec<Quote>, FetchError>,
        calls: AtomicUsize,
    }

    impl MockSource {
        fn ok(quotes: Vec<Quote>) -> Self {
            Self {
                result: Ok(quotes),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                result: Err(FetchError::Network("offline".to_string())),
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl QuoteSource for MockSource {
        fn id(&self) -> &'static str {
            "mock"
        }

        fn fetch(&self) -> std::result::Result<Vec<Quote>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    fn test_quotes() -> Vec<Quote> {
        vec![
            Quote::new(1, "Aim high", "A").with_category("Success"),
            Quote::new(2, "Listen first", "B").with_category("Empathy"),
            Quote::new(3, "Keep going", "C").with_categories(["Motivation", "Success"]),
        ]
    }

    fn ids(quotes: &[&Quote]) -> Vec<u64> {
        quotes.iter().map(|q| q.id.0).collect()
    }

    #[test]
    fn test_new_is_empty() {
        let catalog = QuoteCatalog::new();
        assert!(catalog.is_empty());
        assert!(!catalog.is_loaded());
    }

    #[test]
    fn test_load_replaces_quotes() {
        let mut catalog = QuoteCatalog::from_quotes(vec![Quote::new(9, "old", "x").with_category("Learning")]);
        let source = MockSource::ok(test_quotes());

        assert_eq!(catalog.load(&source).unwrap(), 3);
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.contains(QuoteId(9)));
        assert!(catalog.is_loaded());
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failed_first_load_leaves_catalog_empty() {
        let mut catalog = QuoteCatalog::new();
        let source = MockSource::failing();

        let err = catalog.load(&source).unwrap_err();
        assert!(matches!(err, QuoteError::Fetch(FetchError::Network(_))));
        assert!(catalog.is_empty());
        assert!(!catalog.is_loaded());
        // No automatic retry
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failed_reload_keeps_previous_quotes() {
        let mut catalog = QuoteCatalog::new();
        catalog.load(&MockSource::ok(test_quotes())).unwrap();

        assert!(catalog.load(&MockSource::failing()).is_err());
        assert_eq!(catalog.len(), 3);
        assert!(catalog.is_loaded());
    }

    #[test]
    fn test_filter_all_returns_everything_in_order() {
        let catalog = QuoteCatalog::from_quotes(test_quotes());
        assert_eq!(ids(&catalog.filter_by_category(Category::All)), vec![1, 2, 3]);
    }

    #[test]
    fn test_filter_by_category_exact_subset() {
        let catalog = QuoteCatalog::from_quotes(test_quotes());

        assert_eq!(ids(&catalog.filter_by_category(Category::Success)), vec![1, 3]);
        assert_eq!(ids(&catalog.filter_by_category(Category::Empathy)), vec![2]);
        assert!(catalog.filter_by_category(Category::Leadership).is_empty());
    }

    #[test]
    fn test_filter_matches_every_category_exhaustively() {
        let catalog = QuoteCatalog::from_quotes(test_quotes());
        for category in Category::ALL {
            let filtered = catalog.filter_by_category(category);
            let expected: Vec<u64> = catalog
                .all()
                .iter()
                .filter(|q| category == Category::All || q.categories.iter().any(|c| c == category.as_str()))
                .map(|q| q.id.0)
                .collect();
            assert_eq!(ids(&filtered), expected, "category {category}");
        }
    }

    #[test]
    fn test_ingest_skips_duplicates_and_uncategorized() {
        let mut catalog = QuoteCatalog::new();
        let quotes = vec![
            Quote::new(1, "first", "A").with_category("Success"),
            Quote::new(1, "second", "A").with_category("Success"),
            Quote::new(2, "bare", "B"),
        ];

        assert_eq!(catalog.ingest(Ok(quotes)).unwrap(), 1);
        assert_eq!(catalog.get(QuoteId(1)).unwrap().text, "first");
        assert!(!catalog.contains(QuoteId(2)));
    }
}
