//! Application layer for quote-generator
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SyncSettings;
pub use ports::{
    activity_logger::{ActivityEvent, ActivityLogger, NoActivityLogger},
    quote_storage::{QuoteStorage, SessionStorage, StorageError},
    remote_quotes::{RemoteError, RemoteQuoteSource},
    sync_progress::{NoSyncProgress, SyncProgressNotifier},
};
pub use use_cases::quote_session::{QuoteSession, SessionError};
pub use use_cases::sync_quotes::{
    SYNC_STATUS, SyncError, SyncQuotesUseCase, SyncReport, SyncSchedule,
};
