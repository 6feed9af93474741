//! Error types for Quotebook app services
//!
//! Application-level errors that wrap engine errors and add app-specific variants.

use quotebook::error::QuoteError;
use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] QuoteError),

    #[error("{}", friendly_network_error(.0))]
    Network(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<AppError> for QuoteError {
    /// Flatten into the engine's storage error for the `KeyValueStore` seam
    fn from(e: AppError) -> Self {
        match e {
            AppError::Engine(inner) => inner,
            other => QuoteError::Storage(other.to_string()),
        }
    }
}

/// Result type alias for Quotebook app services
pub type Result<T> = std::result::Result<T, AppError>;

pub(crate) fn friendly_network_error(e: &reqwest::Error) -> String {
    if e.is_builder() {
        if let Some(url) = e.url() {
            return format!("Invalid URL: {url}");
        }
        return "Invalid URL".to_string();
    }
    if e.is_connect() {
        if let Some(url) = e.url() {
            return format!("Could not connect to {}", url.host_str().unwrap_or("server"));
        }
        return "Could not connect to server".to_string();
    }
    if e.is_timeout() {
        return "Connection timed out".to_string();
    }
    if e.is_decode() {
        return "Invalid response from server".to_string();
    }
    format!("Network error: {e}")
}
