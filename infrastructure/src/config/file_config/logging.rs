//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

/// File name of the JSONL activity log inside the data directory
pub const ACTIVITY_LOG_FILE: &str = "activity.jsonl";

/// Raw logging configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Append store mutations and sync runs to `activity.jsonl`
    pub activity_log: bool,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self { activity_log: true }
    }
}

