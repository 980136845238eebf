//! Quote session use case.
//!
//! A [`QuoteSession`] is one run of the quote generator: it owns the
//! [`QuoteStore`], remembers the selected category, and writes the store
//! back through [`QuoteStorage`] after every mutation.
//!
//! The session is handed around by `&mut`, so whichever loop drives it
//! (one-shot command, REPL, sync watcher) is the only writer.

use crate::ports::activity_logger::{ActivityEvent, ActivityLogger, NoActivityLogger};
use crate::ports::quote_storage::{QuoteStorage, SessionStorage, StorageError};
use quotes_domain::{
    CategoryFilter, ImportError, Quote, QuoteError, QuoteStore, ReconcileOutcome, truncate,
};
use rand::Rng;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during a session operation.
///
/// Each one aborts only the operation that raised it.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("{0}")]
    InvalidQuote(#[from] QuoteError),

    #[error("{0}")]
    Import(#[from] ImportError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl SessionError {
    /// Check if the error came from user input rather than storage
    pub fn is_user_error(&self) -> bool {
        !matches!(self, SessionError::Storage(_))
    }
}

/// One running quote session.
pub struct QuoteSession {
    store: QuoteStore,
    filter: CategoryFilter,
    storage: Arc<dyn QuoteStorage>,
    session_storage: Arc<dyn SessionStorage>,
    activity: Arc<dyn ActivityLogger>,
}

impl QuoteSession {
    /// Open a session from persisted state.
    ///
    /// Unreadable or invalid persisted quotes fall back to the built-in
    /// defaults; a saved category that no longer exists falls back to `all`.
    pub fn open(storage: Arc<dyn QuoteStorage>, session_storage: Arc<dyn SessionStorage>) -> Self {
        let persisted = match storage.load_quotes() {
            Ok(persisted) => persisted,
            Err(e) => {
                warn!("Could not read saved quotes, using defaults: {}", e);
                None
            }
        };

        let store = match persisted.as_deref() {
            Some(raw) => QuoteStore::try_load(raw).unwrap_or_else(|e| {
                warn!("Saved quotes are invalid, using defaults: {}", e);
                QuoteStore::with_defaults()
            }),
            None => QuoteStore::load(None),
        };

        let filter = match storage.load_last_category() {
            Ok(Some(saved)) => Self::restore_filter(&store, &saved),
            Ok(None) => CategoryFilter::All,
            Err(e) => {
                warn!("Could not read last category: {}", e);
                CategoryFilter::All
            }
        };

        info!(
            "Opened quote session: {} quotes, category '{}'",
            store.len(),
            filter
        );

        Self {
            store,
            filter,
            storage,
            session_storage,
            activity: Arc::new(NoActivityLogger),
        }
    }

    /// Create with an activity logger.
    pub fn with_activity_logger(mut self, logger: Arc<dyn ActivityLogger>) -> Self {
        self.activity = logger;
        self
    }

    fn restore_filter(store: &QuoteStore, saved: &str) -> CategoryFilter {
        match CategoryFilter::parse(saved) {
            CategoryFilter::Only(category) if !store.has_category(&category) => {
                debug!("Saved category '{}' no longer exists", category);
                CategoryFilter::All
            }
            filter => filter,
        }
    }

    pub fn store(&self) -> &QuoteStore {
        &self.store
    }

    /// The currently selected category filter
    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// `"all"` followed by each distinct category
    pub fn categories(&self) -> Vec<String> {
        self.store.categories()
    }

    /// Change the selected category and remember it for the next session.
    pub fn select_category(&mut self, filter: CategoryFilter) -> Result<(), SessionError> {
        self.storage.save_last_category(filter.as_str())?;
        debug!("Selected category '{}'", filter);
        self.activity.log(ActivityEvent::new(
            "category_selected",
            json!({ "category": filter.as_str() }),
        ));
        self.filter = filter;
        Ok(())
    }

    /// Pick a random quote under the selected category.
    ///
    /// The picked quote becomes the session's last viewed quote.
    pub fn show_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Quote> {
        let picked = self.store.pick_random(&self.filter, rng).cloned();
        match &picked {
            Some(quote) => self.session_storage.set_last_quote(quote),
            None => debug!("No quotes available for category '{}'", self.filter),
        }
        picked
    }

    /// The quote most recently shown in this session
    pub fn last_viewed(&self) -> Option<Quote> {
        self.session_storage.last_quote()
    }

    /// Validate, append and persist a new quote.
    pub fn add_quote(&mut self, text: &str, category: &str) -> Result<Quote, SessionError> {
        let mut staged = self.store.clone();
        let quote = staged.add(text, category)?.clone();
        self.commit(staged)?;

        info!(
            "Added quote in '{}': {}",
            quote.category(),
            truncate(quote.text(), 60)
        );
        self.activity.log(ActivityEvent::new(
            "quote_added",
            json!({ "text": quote.text(), "category": quote.category() }),
        ));

        Ok(quote)
    }

    /// Merge an imported JSON array and persist. Returns how many were added.
    pub fn import_json(&mut self, raw: &str) -> Result<usize, SessionError> {
        let mut staged = self.store.clone();
        let added = staged.merge_imported(raw)?;
        self.commit(staged)?;

        info!("Imported {} quotes", added);
        self.activity.log(ActivityEvent::new(
            "quotes_imported",
            json!({ "added": added, "total": self.store.len() }),
        ));

        Ok(added)
    }

    /// Pretty-printed JSON array of the whole store (export file content)
    pub fn export_json(&self) -> String {
        self.store.to_pretty_json()
    }

    /// Replace the server-tagged records with freshly fetched ones and persist.
    pub fn apply_remote(&mut self, remote: Vec<Quote>) -> Result<ReconcileOutcome, SessionError> {
        let mut staged = self.store.clone();
        let outcome = staged.reconcile_with_remote(remote);
        self.commit(staged)?;

        self.activity.log(ActivityEvent::new(
            "quotes_synced",
            json!({
                "removed": outcome.removed,
                "added": outcome.added,
                "total": self.store.len(),
            }),
        ));

        Ok(outcome)
    }

    /// Save `staged` and make it the current store.
    ///
    /// The in-memory store only changes once the write succeeded.
    fn commit(&mut self, staged: QuoteStore) -> Result<(), SessionError> {
        self.storage.save_quotes(&staged.serialize())?;
        debug!("Persisted {} quotes", staged.len());
        self.store = staged;
        Ok(())
    }
}
