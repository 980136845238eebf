//! In-memory session storage.

use quotes_application::SessionStorage;
use quotes_domain::Quote;
use std::sync::Mutex;

/// [`SessionStorage`] that lives exactly as long as the process.
///
/// The REPL is the session, so nothing here is ever written to disk.
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    last_quote: Mutex<Option<Quote>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn last_quote(&self) -> Option<Quote> {
        self.last_quote.lock().ok().and_then(|last| last.clone())
    }

    fn set_last_quote(&self, quote: &Quote) {
        if let Ok(mut last) = self.last_quote.lock() {
            *last = Some(quote.clone());
        }
    }
}
