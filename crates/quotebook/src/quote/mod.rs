//! Quotes and the quote catalog
//!
//! The immutable quote record, the category vocabulary used to filter it,
//! the source abstraction the catalog is loaded from, and the catalog itself.

pub mod catalog;
pub mod source;
pub mod types;

// Re-exports
pub use catalog::QuoteCatalog;
pub use source::QuoteSource;
pub use types::{Category, Quote, QuoteId};
