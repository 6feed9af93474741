//! Quote list read from a local JSON file
//!
//! Same wire format as the published list; handy offline and in tests.

use std::fs;
use std::path::PathBuf;

use quotebook::error::FetchError;
use quotebook::quote::{Quote, QuoteSource};

use super::raw::parse_quotes;

pub struct FileQuoteSource {
    path: PathBuf,
}

impl FileQuoteSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl QuoteSource for FileQuoteSource {
    fn id(&self) -> &'static str {
        "file"
    }

    fn fetch(&self) -> Result<Vec<Quote>, FetchError> {
        let body = fs::read_to_string(&self.path)
            .map_err(|e| FetchError::Network(format!("Failed to read {:?}: {}", self.path, e)))?;
        parse_quotes(&body)
    }
}
