//! Published quote list over HTTP
//!
//! The quote list is a static JSON array served from a gist. One GET per
//! fetch, no pagination, no auth.

use quotebook::error::FetchError;
use quotebook::quote::{Quote, QuoteSource};

use crate::config::providers::DEFAULT_QUOTES_URL;
use crate::error::{friendly_network_error, AppError, Result};
use crate::network::HttpClient;

use super::raw::into_quotes;

/// Quote source backed by an HTTP URL
pub struct GistQuoteSource {
    client: HttpClient,
    url: String,
}

impl GistQuoteSource {
    /// Create a source for the default quote list
    pub fn new() -> Result<Self> {
        Self::with_url(DEFAULT_QUOTES_URL)
    }

    /// Create a source for a custom URL (for testing or mirrors)
    pub fn with_url(url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new()?,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl QuoteSource for GistQuoteSource {
    fn id(&self) -> &'static str {
        "gist"
    }

    fn fetch(&self) -> std::result::Result<Vec<Quote>, FetchError> {
        let records: Vec<serde_json::Value> = self.client.get_json(&self.url).map_err(fetch_error)?;
        Ok(into_quotes(records))
    }
}

/// Classify an app error from the HTTP client
fn fetch_error(e: AppError) -> FetchError {
    match e {
        AppError::Network(e) => {
            if let Some(status) = e.status() {
                FetchError::Status(status.as_u16())
            } else if e.is_decode() {
                FetchError::Parse(e.to_string())
            } else {
                FetchError::Network(friendly_network_error(&e))
            }
        }
        other => FetchError::Network(other.to_string()),
    }
}
