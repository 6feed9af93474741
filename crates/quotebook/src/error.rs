//! Error types for Quotebook
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

use crate::quote::QuoteId;

/// Failure to retrieve the quote list from its source
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Could not reach quote source: {0}")]
    Network(String),

    #[error("Quote source answered with HTTP {0}")]
    Status(u16),

    #[error("Invalid quote data: {0}")]
    Parse(String),
}

/// Main error type for the Quotebook engine
#[derive(Error, Debug)]
pub enum QuoteError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Unknown quote: {0}")]
    UnknownQuote(QuoteId),

    #[error("Unknown category: {0:?}")]
    UnknownCategory(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for Quotebook
pub type Result<T> = std::result::Result<T, QuoteError>;
