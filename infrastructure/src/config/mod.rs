//! Configuration file loading for quote-generator
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `QUOTES_*` environment variables (e.g. `QUOTES_SYNC__INTERVAL_SECS=60`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./quotes.toml` or `./.quotes.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/quote-generator/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ACTIVITY_LOG_FILE, ConfigIssue, FileConfig, FileLoggingConfig, FileOutputConfig,
    FileStorageConfig, FileSyncConfig, Severity,
};
pub use loader::ConfigLoader;
