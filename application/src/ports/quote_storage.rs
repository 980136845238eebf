//! Quote storage ports
//!
//! Defines where a session's state lives between runs. The store itself
//! only deals in its serialized string; the adapter decides where that
//! string is kept.

use quotes_domain::Quote;
use thiserror::Error;

/// Errors that can occur while reading or writing persisted state
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read {key}: {message}")]
    Read { key: &'static str, message: String },

    #[error("Failed to write {key}: {message}")]
    Write { key: &'static str, message: String },
}

/// Persistent key/value state that survives between sessions
///
/// Holds two entries: the serialized quote array and the last selected
/// category string. Missing entries are `Ok(None)`, not errors.
pub trait QuoteStorage: Send + Sync {
    /// Read the serialized quote array, if any was saved
    fn load_quotes(&self) -> Result<Option<String>, StorageError>;

    /// Replace the serialized quote array
    fn save_quotes(&self, serialized: &str) -> Result<(), StorageError>;

    /// Read the last selected category, if any was saved
    fn load_last_category(&self) -> Result<Option<String>, StorageError>;

    /// Replace the last selected category
    fn save_last_category(&self, category: &str) -> Result<(), StorageError>;
}

/// Session-scoped state, discarded when the session ends
pub trait SessionStorage: Send + Sync {
    /// The quote most recently shown in this session
    fn last_quote(&self) -> Option<Quote>;

    /// Remember the quote just shown
    fn set_last_quote(&self, quote: &Quote);
}
