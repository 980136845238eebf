//! QuoteStore: the ordered quote collection owned by a session

use crate::core::error::{ImportError, QuoteError};
use crate::quote::entities::Quote;
use crate::quote::filter::{ALL_CATEGORIES, CategoryFilter};
use crate::quote::import::parse_imported;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

/// Reserved category marking records that came from the remote endpoint
pub const SERVER_CATEGORY: &str = "Server";

const DEFAULT_QUOTES: [(&str, &str); 2] = [
    (
        "The only limit to our realization of tomorrow is our doubts of today.",
        "Inspiration",
    ),
    (
        "Life is what happens when you're busy making other plans.",
        "Life",
    ),
];

/// Result of replacing the server-tagged records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconcileOutcome {
    /// Server-tagged records that were dropped
    pub removed: usize,
    /// Remote records that were appended
    pub added: usize,
}

/// Ordered collection of quotes (insertion order preserved)
///
/// Every element has already passed [`Quote::new`] validation, so the store
/// never holds an empty text or category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuoteStore {
    quotes: Vec<Quote>,
}

impl QuoteStore {
    pub fn new(quotes: Vec<Quote>) -> Self {
        Self { quotes }
    }

    /// The built-in store used when nothing usable is persisted
    pub fn with_defaults() -> Self {
        let quotes = DEFAULT_QUOTES
            .iter()
            .filter_map(|(text, category)| Quote::new(text, category).ok())
            .collect();
        Self { quotes }
    }

    /// Restore a store from its serialized form, falling back to the defaults.
    ///
    /// Absent input, malformed JSON, a non-array, or any invalid record all
    /// yield [`QuoteStore::with_defaults`]. An empty array is a valid, empty
    /// store.
    pub fn load(serialized: Option<&str>) -> Self {
        serialized
            .and_then(|raw| Self::try_load(raw).ok())
            .unwrap_or_else(Self::with_defaults)
    }

    /// Strict variant of [`QuoteStore::load`] that reports why parsing failed
    pub fn try_load(serialized: &str) -> Result<Self, serde_json::Error> {
        let quotes: Vec<Quote> = serde_json::from_str(serialized)?;
        Ok(Self { quotes })
    }

    /// Compact JSON array used for persistence
    pub fn serialize(&self) -> String {
        serde_json::to_string(&self.quotes).unwrap_or_else(|_| "[]".to_string())
    }

    /// Two-space indented JSON array used for export files
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.quotes).unwrap_or_else(|_| "[]".to_string())
    }

    /// Validate and append a new quote.
    ///
    /// The store is unchanged when validation fails.
    pub fn add(&mut self, text: &str, category: &str) -> Result<&Quote, QuoteError> {
        let quote = Quote::new(text, category)?;
        self.quotes.push(quote);
        Ok(&self.quotes[self.quotes.len() - 1])
    }

    /// `"all"` followed by each distinct category in first-seen order
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut categories = vec![ALL_CATEGORIES.to_string()];

        for quote in &self.quotes {
            let category = quote.category();
            if category != ALL_CATEGORIES && seen.insert(category) {
                categories.push(category.to_string());
            }
        }

        categories
    }

    /// Check whether any quote carries this category
    pub fn has_category(&self, category: &str) -> bool {
        self.quotes.iter().any(|q| q.category() == category)
    }

    /// Quotes passing the filter, in store order
    pub fn quotes_in<'a, 'f>(
        &'a self,
        filter: &'f CategoryFilter,
    ) -> impl Iterator<Item = &'a Quote> + use<'a, 'f> {
        self.quotes.iter().filter(move |q| filter.matches(q))
    }

    /// Pick one quote uniformly at random among those passing the filter.
    ///
    /// Returns `None` when nothing matches.
    pub fn pick_random<R: Rng + ?Sized>(
        &self,
        filter: &CategoryFilter,
        rng: &mut R,
    ) -> Option<&Quote> {
        let matching: Vec<&Quote> = self.quotes_in(filter).collect();
        matching.choose(rng).copied()
    }

    /// Append the valid records of an imported JSON array.
    ///
    /// Returns how many records were appended. On error nothing is added.
    pub fn merge_imported(&mut self, raw: &str) -> Result<usize, ImportError> {
        let imported = parse_imported(raw)?;
        let count = imported.len();
        self.quotes.extend(imported);
        Ok(count)
    }

    /// Drop every `"Server"` record, then append the remote records as given.
    ///
    /// No per-record comparison happens: whatever the remote returned
    /// replaces everything previously fetched from it.
    pub fn reconcile_with_remote(&mut self, remote: Vec<Quote>) -> ReconcileOutcome {
        let before = self.quotes.len();
        self.quotes.retain(|q| q.category() != SERVER_CATEGORY);
        let removed = before - self.quotes.len();

        let added = remote.len();
        self.quotes.extend(remote);

        ReconcileOutcome { removed, added }
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Quote> {
        self.quotes.iter()
    }

    pub fn as_slice(&self) -> &[Quote] {
        &self.quotes
    }
}

impl<'a> IntoIterator for &'a QuoteStore {
    type Item = &'a Quote;
    type IntoIter = std::slice::Iter<'a, Quote>;

    fn into_iter(self) -> Self::IntoIter {
        self.quotes.iter()
    }
}
