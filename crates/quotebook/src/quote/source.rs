//! Quote source trait
//!
//! Defines the interface a remote (or fixture) quote list must implement.

use crate::error::FetchError;

use super::types::Quote;

/// A place the full quote list can be fetched from
///
/// A single call performs a single retrieval. Implementations must not retry
/// on their own; the caller decides whether to try again.
pub trait QuoteSource: Send + Sync {
    /// Machine-readable identifier (e.g., "gist")
    fn id(&self) -> &'static str;

    /// Retrieve every quote the source offers, in source order
    fn fetch(&self) -> Result<Vec<Quote>, FetchError>;
}
