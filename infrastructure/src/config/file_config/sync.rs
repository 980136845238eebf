//! Sync configuration from TOML (`[sync]` section)

use quotes_application::SyncSettings;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Placeholder endpoint returning `[{ "title": ... }, ...]`
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";

/// Raw sync configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSyncConfig {
    /// Run the periodic sync in the REPL
    pub enabled: bool,
    /// GET (fetch) and POST (publish) endpoint
    pub endpoint: String,
    /// Seconds between sync runs
    pub interval_secs: u64,
    /// How many remote items become quotes
    pub limit: usize,
    /// Per-request timeout in seconds (0 = none)
    pub timeout_secs: u64,
    /// POST each newly added quote to the endpoint
    pub publish_on_add: bool,
}

impl Default for FileSyncConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            interval_secs: 30,
            limit: 5,
            timeout_secs: 10,
            publish_on_add: false,
        }
    }
}

impl FileSyncConfig {
    /// Convert to application-level sync settings
    pub fn to_settings(&self) -> SyncSettings {
        SyncSettings {
            enabled: self.enabled,
            publish_on_add: self.publish_on_add,
            ..SyncSettings::with_interval_seconds(self.interval_secs)
        }
    }

    /// Request timeout, `None` when disabled
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_settings() {
        let config = FileSyncConfig {
            interval_secs: 45,
            publish_on_add: true,
            ..FileSyncConfig::default()
        };
        let settings = config.to_settings();
        assert!(settings.enabled);
        assert!(settings.publish_on_add);
        assert_eq!(settings.interval, Duration::from_secs(45));
    }

    #[test]
    fn test_zero_timeout_disables_it() {
        let config = FileSyncConfig {
            timeout_secs: 0,
            ..FileSyncConfig::default()
        };
        assert!(config.timeout().is_none());
        assert_eq!(
            FileSyncConfig::default().timeout(),
            Some(Duration::from_secs(10))
        );
    }
}
