//! Domain error types

use std::fmt;
use thiserror::Error;

/// The field of a quote that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteField {
    Text,
    Category,
}

impl fmt::Display for QuoteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteField::Text => write!(f, "text"),
            QuoteField::Category => write!(f, "category"),
        }
    }
}

/// Validation errors for a single quote
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuoteError {
    #[error("Quote {0} cannot be empty")]
    EmptyField(QuoteField),
}

/// Errors raised while merging imported quotes
///
/// The store is left untouched whenever one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    #[error("Invalid JSON: {0}")]
    Parse(String),

    #[error("Expected a JSON array of quotes")]
    Format,

    #[error("No valid quotes found (each entry needs a non-empty text and category)")]
    NoValidRecords,
}

impl ImportError {
    /// Check if the input was not JSON at all
    pub fn is_parse(&self) -> bool {
        matches!(self, ImportError::Parse(_))
    }
}
