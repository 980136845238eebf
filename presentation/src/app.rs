//! Command handlers shared by the one-shot CLI and the REPL.
//!
//! Each handler runs one operation against the [`QuoteSession`] and returns
//! the text to print. Errors abort only that operation.

use crate::output::console::ConsoleFormatter;
use quotes_application::{
    QuoteSession, SessionError, SyncError, SyncProgressNotifier, SyncQuotesUseCase,
    SyncSchedule, SyncSettings,
};
use quotes_domain::{CategoryFilter, OutputFormat, Quote};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;
use tracing::warn;

/// Errors surfaced to the user by a command
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Please fill in both quote and category ({0})")]
    InvalidQuote(String),

    #[error("Failed to import: {0}")]
    ImportFailed(String),

    #[error("Failed to write {path}: {source}")]
    ExportFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Session(SessionError),

    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error("Sync is disabled in the configuration")]
    SyncDisabled,
}

impl From<SessionError> for AppError {
    fn from(error: SessionError) -> Self {
        match error {
            SessionError::InvalidQuote(e) => AppError::InvalidQuote(e.to_string()),
            SessionError::Import(e) => AppError::ImportFailed(e.to_string()),
            other => AppError::Session(other),
        }
    }
}

/// The running application: one session plus its optional sync collaborator.
pub struct QuoteApp {
    session: QuoteSession,
    sync: Option<SyncQuotesUseCase>,
    settings: SyncSettings,
    rng: StdRng,
}

impl QuoteApp {
    pub fn new(session: QuoteSession) -> Self {
        Self {
            session,
            sync: None,
            settings: SyncSettings::disabled(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Attach the remote sync use case and its settings.
    pub fn with_sync(mut self, sync: SyncQuotesUseCase, settings: SyncSettings) -> Self {
        self.sync = Some(sync);
        self.settings = settings;
        self
    }

    /// Replace the random source (deterministic picks in tests)
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn session(&self) -> &QuoteSession {
        &self.session
    }

    pub fn settings(&self) -> &SyncSettings {
        &self.settings
    }

    /// Show a random quote, optionally switching category first.
    pub fn show(&mut self, category: Option<&str>) -> Result<String, AppError> {
        if let Some(category) = category {
            self.session.select_category(CategoryFilter::parse(category))?;
        }
        let picked = self.session.show_random(&mut self.rng);
        Ok(ConsoleFormatter::quote_or_empty(picked.as_ref()))
    }

    /// Switch the selected category without showing a quote
    pub fn select_category(&mut self, category: &str) -> Result<String, AppError> {
        let filter = CategoryFilter::parse(category);
        let known = match &filter {
            CategoryFilter::All => true,
            CategoryFilter::Only(name) => self.session.store().has_category(name),
        };
        self.session.select_category(filter)?;

        let mut output = format!("Category: {}", self.session.filter());
        if !known {
            output.push_str(&format!("\n{}", ConsoleFormatter::quote_or_empty(None)));
        }
        Ok(output)
    }

    /// The last quote shown in this session, if any
    pub fn last_viewed(&self) -> Option<String> {
        self.session
            .last_viewed()
            .map(|quote| ConsoleFormatter::last_viewed(&quote))
    }

    /// Add a quote; publishes it when asked to or when configured to.
    pub async fn add(
        &mut self,
        text: &str,
        category: &str,
        publish: bool,
    ) -> Result<String, AppError> {
        let quote = self.session.add_quote(text, category)?;
        let mut output = ConsoleFormatter::quote_added(&quote);

        if (publish || self.settings.publish_on_add)
            && let Some(note) = self.publish(&quote).await
        {
            output.push('\n');
            output.push_str(&note);
        }

        Ok(output)
    }

    async fn publish(&self, quote: &Quote) -> Option<String> {
        let sync = self.sync.as_ref()?;
        match sync.publish(quote).await {
            Ok(()) => None,
            Err(e) => {
                warn!("Could not publish quote: {}", e);
                Some(ConsoleFormatter::error(&format!("could not publish quote: {}", e)))
            }
        }
    }

    pub fn categories(&self) -> String {
        ConsoleFormatter::categories(&self.session.categories(), self.session.filter())
    }

    /// List quotes in one category (or all of them)
    pub fn list(&self, category: Option<&str>, format: OutputFormat) -> String {
        let filter = category.map(CategoryFilter::parse).unwrap_or_default();
        let quotes: Vec<&Quote> = self.session.store().quotes_in(&filter).collect();
        match format {
            OutputFormat::Text => ConsoleFormatter::list(&quotes),
            OutputFormat::Json => ConsoleFormatter::list_json(&quotes),
        }
    }

    /// Pretty JSON of every quote
    pub fn export_json(&self) -> String {
        self.session.export_json()
    }

    /// Write the export file
    pub fn export_to(&self, path: &Path) -> Result<String, AppError> {
        std::fs::write(path, self.session.export_json()).map_err(|source| {
            AppError::ExportFailed {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Ok(ConsoleFormatter::exported(self.session.store().len(), path))
    }

    /// Read a JSON file and merge its valid quotes
    pub fn import_from(&mut self, path: &Path) -> Result<String, AppError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| AppError::ImportFailed(format!("{}: {}", path.display(), e)))?;
        self.import_json(&raw)
    }

    pub fn import_json(&mut self, raw: &str) -> Result<String, AppError> {
        let added = self.session.import_json(raw)?;
        Ok(ConsoleFormatter::imported(added))
    }

    fn sync_use_case(&self) -> Result<SyncQuotesUseCase, AppError> {
        self.sync.clone().ok_or(AppError::SyncDisabled)
    }

    /// Run one sync now
    pub async fn sync(&mut self, progress: &dyn SyncProgressNotifier) -> Result<String, AppError> {
        let sync = self.sync_use_case()?;
        let report = sync.sync_with_progress(&mut self.session, progress).await?;
        Ok(ConsoleFormatter::sync_report(&report))
    }

    /// Run a sync if the schedule says one is due.
    ///
    /// Failures are reported through `progress` only; the caller keeps going.
    pub async fn sync_if_due(
        &mut self,
        schedule: &mut SyncSchedule,
        progress: &dyn SyncProgressNotifier,
    ) -> bool {
        let now = Instant::now();
        if !self.settings.enabled || !schedule.is_due(now) {
            return false;
        }
        let Some(sync) = self.sync.clone() else {
            return false;
        };

        schedule.mark_run(now);
        let _ = sync.sync_with_progress(&mut self.session, progress).await;
        true
    }

    /// Sync on the configured interval until `shutdown` resolves
    pub async fn watch<F>(
        &mut self,
        progress: &dyn SyncProgressNotifier,
        shutdown: F,
    ) -> Result<usize, AppError>
    where
        F: Future<Output = ()>,
    {
        let sync = self.sync_use_case()?;
        let interval = self.settings.interval;
        Ok(sync
            .watch(&mut self.session, interval, progress, shutdown)
            .await)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use fakes::*;
    use quotes_application::{NoSyncProgress, RemoteError, RemoteQuoteSource};
    use std::sync::Arc;

    /// In-memory doubles for the storage ports
    pub(crate) mod fakes {
        use quotes_application::{QuoteStorage, SessionStorage, StorageError};
        use quotes_domain::Quote;
        use std::sync::Mutex;

        #[derive(Default)]
        pub struct FakeStorage {
            pub quotes: Mutex<Option<String>>,
            pub category: Mutex<Option<String>>,
        }

        impl QuoteStorage for FakeStorage {
            fn load_quotes(&self) -> Result<Option<String>, StorageError> {
                Ok(self.quotes.lock().unwrap().clone())
            }
            fn save_quotes(&self, serialized: &str) -> Result<(), StorageError> {
                *self.quotes.lock().unwrap() = Some(serialized.to_string());
                Ok(())
            }
            fn load_last_category(&self) -> Result<Option<String>, StorageError> {
                Ok(self.category.lock().unwrap().clone())
            }
            fn save_last_category(&self, category: &str) -> Result<(), StorageError> {
                *self.category.lock().unwrap() = Some(category.to_string());
                Ok(())
            }
        }

        #[derive(Default)]
        pub struct FakeSession {
            last: Mutex<Option<Quote>>,
        }

        impl SessionStorage for FakeSession {
            fn last_quote(&self) -> Option<Quote> {
                self.last.lock().unwrap().clone()
            }
            fn set_last_quote(&self, quote: &Quote) {
                *self.last.lock().unwrap() = Some(quote.clone());
            }
        }
    }

    struct FakeRemote {
        fail: bool,
        published: std::sync::Mutex<Vec<Quote>>,
    }

    #[async_trait::async_trait]
    impl RemoteQuoteSource for FakeRemote {
        async fn fetch_quotes(&self) -> Result<Vec<Quote>, RemoteError> {
            if self.fail {
                return Err(RemoteError::Timeout);
            }
            Ok(vec![Quote::new("From the server.", "Server").unwrap()])
        }

        async fn publish_quote(&self, quote: &Quote) -> Result<(), RemoteError> {
            if self.fail {
                return Err(RemoteError::HttpStatus { status: 500 });
            }
            self.published.lock().unwrap().push(quote.clone());
            Ok(())
        }
    }

    pub(crate) fn app() -> QuoteApp {
        colored::control::set_override(false);
        let session = QuoteSession::open(
            Arc::new(FakeStorage::default()),
            Arc::new(FakeSession::default()),
        );
        QuoteApp::new(session).with_rng(StdRng::seed_from_u64(11))
    }

    fn app_with_remote(fail: bool) -> (QuoteApp, Arc<FakeRemote>) {
        let remote = Arc::new(FakeRemote {
            fail,
            published: std::sync::Mutex::new(Vec::new()),
        });
        let app = app().with_sync(
            SyncQuotesUseCase::new(remote.clone()),
            SyncSettings::default(),
        );
        (app, remote)
    }

    #[test]
    fn test_show_with_unknown_category() {
        let mut app = app();
        assert_eq!(
            app.show(Some("Poetry")).unwrap(),
            crate::output::console::NO_QUOTES_MESSAGE
        );
        assert!(app.last_viewed().is_none());
    }

    #[test]
    fn test_show_records_last_viewed() {
        let mut app = app();
        let shown = app.show(Some("Life")).unwrap();
        assert!(shown.ends_with("- (Life)"));
        assert!(app.last_viewed().unwrap().contains("- (Life)"));
    }

    #[tokio::test]
    async fn test_add_validation_message() {
        let mut app = app();
        let err = app.add("  ", "Life", false).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidQuote(_)));
        assert!(err.to_string().starts_with("Please fill in both quote and category"));
    }

    #[tokio::test]
    async fn test_add_with_publish() {
        let (mut app, remote) = app_with_remote(false);
        let output = app.add("Share this.", "Social", true).await.unwrap();

        assert!(output.starts_with("Quote added successfully!"));
        assert_eq!(remote.published.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_add_publish_failure_still_adds() {
        let (mut app, _remote) = app_with_remote(true);
        let output = app.add("Share this.", "Social", true).await.unwrap();

        assert!(output.contains("could not publish quote"));
        assert!(app.session().store().has_category("Social"));
    }

    #[test]
    fn test_import_and_list() {
        let mut app = app();
        let output = app
            .import_json(r#"[{"text":"A","category":"B"},{"bad":1}]"#)
            .unwrap();
        assert_eq!(output, "Quotes imported successfully! (1 added)");
        assert_eq!(app.list(Some("B"), OutputFormat::Text), "1. \"A\" - (B)\n");
    }

    #[test]
    fn test_import_failures() {
        let mut app = app();
        let err = app.import_json(r#"{"not":"array"}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to import: Expected a JSON array of quotes"
        );

        let err = app.import_from(Path::new("/definitely/missing.json")).unwrap_err();
        assert!(matches!(err, AppError::ImportFailed(_)));
    }

    #[test]
    fn test_export_to_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.json");
        let source = app();

        let output = source.export_to(&path).unwrap();
        assert!(output.contains("Exported 2 quotes"));

        // Importing the export duplicates every quote
        let mut target = app();
        target.import_from(&path).unwrap();
        assert_eq!(target.session().store().len(), 4);
    }

    #[tokio::test]
    async fn test_sync_disabled_without_remote() {
        let mut app = app();
        let err = app.sync(&NoSyncProgress).await.unwrap_err();
        assert!(matches!(err, AppError::SyncDisabled));
    }

    #[tokio::test]
    async fn test_sync_reports_status() {
        let (mut app, _remote) = app_with_remote(false);
        let output = app.sync(&NoSyncProgress).await.unwrap();
        assert_eq!(
            output,
            "Quotes synced with server. (removed 0, added 1, 3 total)"
        );
    }

    #[tokio::test]
    async fn test_sync_if_due_runs_once_per_interval() {
        let (mut app, _remote) = app_with_remote(true);
        let mut schedule = SyncSchedule::new(app.settings().interval);

        assert!(app.sync_if_due(&mut schedule, &NoSyncProgress).await);
        assert!(!app.sync_if_due(&mut schedule, &NoSyncProgress).await);
        // Failed sync leaves the store alone
        assert_eq!(app.session().store().len(), 2);
    }
}
