//! Quote sources
//!
//! Implementations of the engine's `QuoteSource`: the published HTTP quote
//! list and a local JSON file for offline use.

pub mod file;
pub mod gist;
mod raw;

pub use file::FileQuoteSource;
pub use gist::GistQuoteSource;

use quotebook::quote::QuoteSource;

use crate::error::Result;

/// Pick a source for `location`: http(s) URLs go over the network,
/// anything else is read as a local path.
pub fn source_for(location: &str) -> Result<Box<dyn QuoteSource>> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(GistQuoteSource::with_url(location)?))
    } else {
        Ok(Box::new(FileQuoteSource::new(location)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_for_url() {
        let source = source_for("https://example.com/quotes.json").unwrap();
        assert_eq!(source.id(), "gist");
    }

    #[test]
    fn test_source_for_path() {
        let source = source_for("/tmp/quotes.json").unwrap();
        assert_eq!(source.id(), "file");
    }
}
