//! Wire format of a published quote list
//!
//! Parsed leniently and per record: ids may arrive as numbers or numeric
//! strings, missing or null text fields default to empty, and a record that
//! cannot be read is skipped without losing the rest of the list.

use quotebook::error::FetchError;
use quotebook::quote::{Quote, QuoteId};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
    Other(Value),
}

#[derive(Debug, Deserialize)]
struct RawQuote {
    id: RawId,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    categories: Option<Vec<Option<String>>>,
}

impl RawQuote {
    fn into_quote(self) -> Option<Quote> {
        let id = match self.id {
            RawId::Number(n) => QuoteId(n),
            RawId::Text(s) => match s.parse::<QuoteId>() {
                Ok(id) => id,
                Err(_) => {
                    warn!(id = %s, "skipping quote with non-numeric id");
                    return None;
                }
            },
            RawId::Other(v) => {
                warn!(id = %v, "skipping quote with unusable id");
                return None;
            }
        };

        let categories = self
            .categories
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect::<Vec<_>>();

        let text = self.text.unwrap_or_default();
        let author = self.author.unwrap_or_default();
        Some(Quote::new(id, text.trim(), author.trim()).with_categories(categories))
    }
}

/// Parse a JSON array of quote records
///
/// Only a body that is not a JSON array fails; bad elements are skipped.
pub(crate) fn parse_quotes(body: &str) -> Result<Vec<Quote>, FetchError> {
    let records: Vec<Value> =
        serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;
    Ok(into_quotes(records))
}

/// Convert already-decoded array elements, skipping the ones that do not fit
pub(crate) fn into_quotes(records: Vec<Value>) -> Vec<Quote> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<RawQuote>(record) {
            Ok(raw) => raw.into_quote(),
            Err(e) => {
                warn!(index, error = %e, "skipping malformed quote record");
                None
            }
        })
        .collect()
}
