//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave,
//! such as how often the remote endpoint is polled.

use std::time::Duration;

/// Shortest interval the periodic sync accepts
pub const MIN_SYNC_INTERVAL: Duration = Duration::from_secs(1);

/// Remote sync behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncSettings {
    /// Whether the periodic sync runs at all
    pub enabled: bool,
    /// Fixed delay between sync runs (no backoff)
    pub interval: Duration,
    /// POST each newly added quote to the remote endpoint
    pub publish_on_add: bool,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            interval: Duration::from_secs(30),
            publish_on_add: false,
        }
    }
}

impl SyncSettings {
    /// Creates settings with the interval specified in seconds.
    ///
    /// Intervals below [`MIN_SYNC_INTERVAL`] are raised to it.
    pub fn with_interval_seconds(seconds: u64) -> Self {
        Self {
            interval: Duration::from_secs(seconds).max(MIN_SYNC_INTERVAL),
            ..Self::default()
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}
