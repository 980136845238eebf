//! Infrastructure layer for quote-generator
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod remote;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ACTIVITY_LOG_FILE, ConfigIssue, ConfigLoader, FileConfig, FileLoggingConfig,
    FileOutputConfig, FileStorageConfig, FileSyncConfig, Severity,
};
pub use logging::JsonlActivityLogger;
pub use remote::HttpQuoteSource;
pub use storage::{JsonFileStorage, MemorySessionStorage};
