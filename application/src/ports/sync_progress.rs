//! Sync progress notification port
//!
//! Defines the interface for reporting progress during remote sync runs.

use crate::use_cases::sync_quotes::{SyncError, SyncReport};

/// Callback for progress updates during sync
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, status line, etc.)
pub trait SyncProgressNotifier: Send + Sync {
    /// Called before the remote fetch starts
    fn on_sync_start(&self);

    /// Called after the store was reconciled and persisted
    fn on_sync_complete(&self, report: &SyncReport);

    /// Called when the run failed; on a fetch failure the store is unchanged
    fn on_sync_failed(&self, error: &SyncError);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoSyncProgress;

impl SyncProgressNotifier for NoSyncProgress {
    fn on_sync_start(&self) {}
    fn on_sync_complete(&self, _report: &SyncReport) {}
    fn on_sync_failed(&self, _error: &SyncError) {}
}
