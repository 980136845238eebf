//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod activity_logger;
pub mod quote_storage;
pub mod remote_quotes;
pub mod sync_progress;
