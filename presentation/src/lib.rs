//! Presentation layer for quote-generator
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive REPL.

pub mod app;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod repl;

// Re-export commonly used types
pub use app::{AppError, QuoteApp};
pub use cli::commands::{Cli, Command, ListFormat};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::{ConsoleFormatter, NO_QUOTES_MESSAGE};
pub use progress::reporter::{SimpleSyncProgress, SyncSpinner};
pub use repl::QuoteRepl;
