//! Sync Quotes use case.
//!
//! Pulls the remote quotes and reconciles them into a [`QuoteSession`]:
//! every `"Server"` record is dropped and the fetched ones are appended.
//! There is no retry and no backoff; a failed run leaves the store as it was
//! and the next scheduled run simply tries again.

use crate::ports::activity_logger::{ActivityEvent, ActivityLogger, NoActivityLogger};
use crate::ports::remote_quotes::{RemoteError, RemoteQuoteSource};
use crate::ports::sync_progress::SyncProgressNotifier;
use crate::use_cases::quote_session::{QuoteSession, SessionError};
use quotes_domain::{Quote, ReconcileOutcome};
use serde_json::json;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// Status line shown after a successful sync
pub const SYNC_STATUS: &str = "Quotes synced with server.";

/// Errors that can occur during a sync run.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Sync failed: {0}")]
    Remote(#[from] RemoteError),

    #[error("Sync failed: {0}")]
    Session(#[from] SessionError),
}

/// Result of one successful sync run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub outcome: ReconcileOutcome,
    /// Store size after reconciling
    pub total: usize,
    pub status: &'static str,
}

/// Use case for reconciling a session with the remote endpoint.
pub struct SyncQuotesUseCase {
    remote: Arc<dyn RemoteQuoteSource>,
    activity: Arc<dyn ActivityLogger>,
}

impl Clone for SyncQuotesUseCase {
    fn clone(&self) -> Self {
        Self {
            remote: self.remote.clone(),
            activity: self.activity.clone(),
        }
    }
}

impl SyncQuotesUseCase {
    pub fn new(remote: Arc<dyn RemoteQuoteSource>) -> Self {
        Self {
            remote,
            activity: Arc::new(NoActivityLogger),
        }
    }

    /// Create with an activity logger.
    pub fn with_activity_logger(mut self, logger: Arc<dyn ActivityLogger>) -> Self {
        self.activity = logger;
        self
    }

    /// Fetch once and reconcile.
    ///
    /// On a remote failure the session is not touched.
    pub async fn sync_once(&self, session: &mut QuoteSession) -> Result<SyncReport, SyncError> {
        debug!("Fetching remote quotes");

        let remote = match self.remote.fetch_quotes().await {
            Ok(remote) => remote,
            Err(e) => {
                warn!("Remote fetch failed: {}", e);
                self.activity.log(ActivityEvent::new(
                    "sync_failed",
                    json!({ "error": e.to_string() }),
                ));
                return Err(e.into());
            }
        };

        let outcome = session.apply_remote(remote)?;
        info!(
            "Synced with server: removed {}, added {}",
            outcome.removed, outcome.added
        );

        Ok(SyncReport {
            outcome,
            total: session.store().len(),
            status: SYNC_STATUS,
        })
    }

    /// [`sync_once`](Self::sync_once) with progress callbacks.
    pub async fn sync_with_progress(
        &self,
        session: &mut QuoteSession,
        progress: &dyn SyncProgressNotifier,
    ) -> Result<SyncReport, SyncError> {
        progress.on_sync_start();
        let result = self.sync_once(session).await;
        match &result {
            Ok(report) => progress.on_sync_complete(report),
            Err(e) => progress.on_sync_failed(e),
        }
        result
    }

    /// Send one quote to the remote endpoint.
    ///
    /// Only success or failure is observed; the response body is ignored.
    pub async fn publish(&self, quote: &Quote) -> Result<(), SyncError> {
        self.remote.publish_quote(quote).await?;
        debug!("Published quote in '{}'", quote.category());
        Ok(())
    }

    /// Sync on a fixed interval until `shutdown` resolves.
    ///
    /// The first run happens immediately. Failed runs are reported through
    /// `progress` and never stop the loop; `shutdown` also interrupts a run
    /// that is still waiting on the remote. Returns the number of runs.
    pub async fn watch<F>(
        &self,
        session: &mut QuoteSession,
        every: Duration,
        progress: &dyn SyncProgressNotifier,
        shutdown: F,
    ) -> usize
    where
        F: Future<Output = ()>,
    {
        let mut ticker = tokio::time::interval(every.max(crate::config::MIN_SYNC_INTERVAL));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        let mut runs = 0;
        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("Stopping periodic sync after {} runs", runs);
                    break;
                }
                _ = ticker.tick() => runs += 1,
            }

            // A fetch in flight is dropped on shutdown; the store is only
            // touched after the fetch returns
            tokio::select! {
                _ = &mut shutdown => {
                    info!("Stopping periodic sync during run {}", runs);
                    break;
                }
                // Failures are reported through `progress`
                _ = self.sync_with_progress(session, progress) => {}
            }
        }
        runs
    }
}

/// Decides when the next periodic sync is due.
///
/// Used by loops that cannot block on a timer (the REPL checks it between
/// commands), so a sync never interleaves with a user mutation.
#[derive(Debug, Clone)]
pub struct SyncSchedule {
    every: Duration,
    last_run: Option<Instant>,
}

impl SyncSchedule {
    pub fn new(every: Duration) -> Self {
        Self {
            every,
            last_run: None,
        }
    }

    /// Due on first check, then once per interval
    pub fn is_due(&self, now: Instant) -> bool {
        match self.last_run {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.every,
        }
    }

    pub fn mark_run(&mut self, now: Instant) {
        self.last_run = Some(now);
    }
}
