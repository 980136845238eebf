//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod logging;
mod output;
mod storage;
mod sync;

pub use logging::{ACTIVITY_LOG_FILE, FileLoggingConfig};
pub use output::FileOutputConfig;
pub use storage::FileStorageConfig;
pub use sync::FileSyncConfig;

use serde::{Deserialize, Serialize};

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: a fallback value will be used instead.
    Warning,
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Dotted key of the offending field, e.g. `sync.interval_secs`
    pub field: &'static str,
    pub message: String,
}

impl ConfigIssue {
    fn warning(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field,
            message: message.into(),
        }
    }

    fn error(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field,
            message: message.into(),
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Where quotes and the last category are kept
    pub storage: FileStorageConfig,
    /// Remote endpoint polling
    pub sync: FileSyncConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Activity log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.sync.enabled && self.sync.endpoint.trim().is_empty() {
            issues.push(ConfigIssue::error(
                "sync.endpoint",
                "sync.endpoint is empty but sync is enabled",
            ));
        }

        if self.sync.interval_secs == 0 {
            issues.push(ConfigIssue::warning(
                "sync.interval_secs",
                "sync.interval_secs is 0, using 1 second",
            ));
        }

        if self.sync.limit == 0 {
            issues.push(ConfigIssue::warning(
                "sync.limit",
                "sync.limit is 0, every sync will only remove server quotes",
            ));
        }

        if self.sync.timeout_secs == 0 {
            issues.push(ConfigIssue::warning(
                "sync.timeout_secs",
                "sync.timeout_secs is 0, requests will use no timeout",
            ));
        }

        issues
    }

    /// Check if any issue prevents the configuration from being used
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}
