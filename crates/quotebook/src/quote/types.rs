//! Quote data types
//!
//! `Quote` is the record shared by the catalog, the favorites list and the
//! persisted favorites payload. `Category` is the fixed filter vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::QuoteError;

// =============================================================================
// QuoteId
// =============================================================================

/// Stable quote identifier, as assigned by the quote source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteId(pub u64);

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for QuoteId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(QuoteId)
    }
}

impl From<u64> for QuoteId {
    fn from(id: u64) -> Self {
        QuoteId(id)
    }
}

// =============================================================================
// Quote
// =============================================================================

/// A quote with its author and category labels
///
/// Never mutated once ingested. Category labels are kept as the source
/// spelled them, so labels outside [`Category`] survive persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: QuoteId,
    pub text: String,
    pub author: String,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl Quote {
    /// Create a quote with no categories yet
    pub fn new(id: impl Into<QuoteId>, text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            author: author.into(),
            categories: Vec::new(),
        }
    }

    /// Add a category label (duplicates are ignored)
    pub fn with_category(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        if !self.categories.contains(&label) {
            self.categories.push(label);
        }
        self
    }

    /// Add several category labels
    pub fn with_categories<I, S>(self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        labels
            .into_iter()
            .fold(self, |quote, label| quote.with_category(label))
    }

    /// Whether this quote is shown under `category`
    ///
    /// Every quote matches [`Category::All`].
    pub fn matches(&self, category: Category) -> bool {
        match category {
            Category::All => true,
            other => self.categories.iter().any(|c| c == other.as_str()),
        }
    }
}

// =============================================================================
// Category
// =============================================================================

/// Filter label drawn from the fixed quote vocabulary
///
/// `All` is the no-filter sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    All,
    Leadership,
    Empathy,
    Motivation,
    Learning,
    Success,
    Empowerment,
}

impl Category {
    /// Every category in display order, `All` first
    pub const ALL: [Category; 7] = [
        Category::All,
        Category::Leadership,
        Category::Empathy,
        Category::Motivation,
        Category::Learning,
        Category::Success,
        Category::Empowerment,
    ];

    /// Label as it appears in quote records
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Leadership => "Leadership",
            Category::Empathy => "Empathy",
            Category::Motivation => "Motivation",
            Category::Learning => "Learning",
            Category::Success => "Success",
            Category::Empowerment => "Empowerment",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = QuoteError;

    /// Case-insensitive lookup; anything outside the vocabulary is rejected
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| QuoteError::UnknownCategory(s.to_string()))
    }
}
