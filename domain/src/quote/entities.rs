//! Quote entity

use crate::core::error::{QuoteError, QuoteField};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A quote and the category it is filed under (Value Object)
///
/// Both fields are trimmed on construction and must be non-empty.
/// Equality is structural; the store allows duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawQuote")]
pub struct Quote {
    text: String,
    category: String,
}

/// Unvalidated wire shape, checked through [`Quote::new`]
#[derive(Deserialize)]
struct RawQuote {
    text: String,
    category: String,
}

impl TryFrom<RawQuote> for Quote {
    type Error = QuoteError;

    fn try_from(raw: RawQuote) -> Result<Self, Self::Error> {
        Quote::new(raw.text, raw.category)
    }
}

impl Quote {
    /// Create a new quote, rejecting empty (or whitespace-only) fields
    pub fn new(text: impl AsRef<str>, category: impl AsRef<str>) -> Result<Self, QuoteError> {
        let text = text.as_ref().trim();
        let category = category.as_ref().trim();

        if text.is_empty() {
            return Err(QuoteError::EmptyField(QuoteField::Text));
        }
        if category.is_empty() {
            return Err(QuoteError::EmptyField(QuoteField::Category));
        }

        Ok(Self {
            text: text.to_string(),
            category: category.to_string(),
        })
    }

    /// Get the quote text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the category
    pub fn category(&self) -> &str {
        &self.category
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" - ({})", self.text, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_creation_trims_fields() {
        let q = Quote::new("  Stay hungry.  ", " Motivation ").unwrap();
        assert_eq!(q.text(), "Stay hungry.");
        assert_eq!(q.category(), "Motivation");
    }

    #[test]
    fn test_empty_text_rejected() {
        assert_eq!(
            Quote::new("   ", "Life"),
            Err(QuoteError::EmptyField(QuoteField::Text))
        );
    }

    #[test]
    fn test_empty_category_rejected() {
        assert_eq!(
            Quote::new("Stay hungry.", ""),
            Err(QuoteError::EmptyField(QuoteField::Category))
        );
    }

    #[test]
    fn test_display_format() {
        let q = Quote::new("Stay hungry.", "Motivation").unwrap();
        assert_eq!(q.to_string(), "\"Stay hungry.\" - (Motivation)");
    }

    #[test]
    fn test_serialize_field_order() {
        let q = Quote::new("Stay hungry.", "Motivation").unwrap();
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(json, r#"{"text":"Stay hungry.","category":"Motivation"}"#);
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Result<Quote, _> =
            serde_json::from_str(r#"{"text":"Stay hungry.","category":"Motivation"}"#);
        assert!(ok.is_ok());

        let empty: Result<Quote, _> = serde_json::from_str(r#"{"text":"","category":"Life"}"#);
        assert!(empty.is_err());
    }
}
