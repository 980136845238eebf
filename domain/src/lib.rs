//! Domain layer for quote-generator
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Quote
//!
//! A [`Quote`] is a `{text, category}` pair. Both fields are trimmed and must
//! be non-empty; duplicates are allowed.
//!
//! ## QuoteStore
//!
//! The [`QuoteStore`] is the ordered collection a session works with. It knows
//! how to restore itself from its JSON form, derive the category list, pick a
//! random quote under a [`CategoryFilter`], merge imported JSON and reconcile
//! the `"Server"`-tagged records fetched from a remote endpoint.

pub mod config;
pub mod core;
pub mod quote;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{
    error::{ImportError, QuoteError, QuoteField},
    string::truncate,
};
pub use quote::{
    entities::Quote,
    filter::{ALL_CATEGORIES, CategoryFilter},
    import::parse_imported,
    store::{QuoteStore, ReconcileOutcome, SERVER_CATEGORY},
};
