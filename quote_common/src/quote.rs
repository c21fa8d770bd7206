//! Quote record and category filter.
//!
//! A `Quote` is a `{text, category}` pair with no identifier; two quotes are the "same"
//! quote when their text is exactly equal. Quotes are serialized as plain JSON objects,
//! which is also the shape of the import/export file and of the POST body.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuoteError;

/// Sentinel category value that selects every quote.
pub const ALL_CATEGORIES: &str = "all";

/// A single quote with its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Quote body, used as the identity key during merge.
    pub text: String,
    /// Free-form category label.
    pub category: String,
}

impl Quote {
    /// Builds a quote from user input, trimming both fields.
    ///
    /// Fails with `QuoteError::Validation` if either field is empty after trimming.
    pub fn new(text: &str, category: &str) -> Result<Self, QuoteError> {
        let text = text.trim();
        let category = category.trim();
        if text.is_empty() {
            return Err(QuoteError::Validation("quote text is empty".to_string()));
        }
        if category.is_empty() {
            return Err(QuoteError::Validation("quote category is empty".to_string()));
        }
        Ok(Quote {
            text: text.to_string(),
            category: category.to_string(),
        })
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" ({})", self.text, self.category)
    }
}

/// Selection applied when listing quotes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Every quote.
    #[default]
    All,
    /// Quotes whose category equals the value exactly.
    Category(String),
}

impl CategoryFilter {
    /// Whether `quote` passes this filter.
    pub fn matches(&self, quote: &Quote) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(category) => &quote.category == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(QuoteError::Validation("category filter is empty".to_string()));
        }
        if trimmed == ALL_CATEGORIES {
            Ok(CategoryFilter::All)
        } else {
            Ok(CategoryFilter::Category(trimmed.to_string()))
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL_CATEGORIES),
            CategoryFilter::Category(category) => f.write_str(category),
        }
    }
}
