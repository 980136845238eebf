//! Storage configuration from TOML (`[storage]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw storage configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    /// Directory holding `quotes.json`, `last_category` and the activity log.
    /// Defaults to the platform data directory.
    pub data_dir: Option<PathBuf>,
}

impl FileStorageConfig {
    /// Resolve the data directory, falling back to `<data dir>/quote-generator`
    pub fn resolve_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("quote-generator")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_data_dir_wins() {
        let config = FileStorageConfig {
            data_dir: Some(PathBuf::from("/srv/quotes")),
        };
        assert_eq!(config.resolve_data_dir(), PathBuf::from("/srv/quotes"));
    }

    #[test]
    fn test_default_data_dir_is_namespaced() {
        let dir = FileStorageConfig::default().resolve_data_dir();
        assert!(dir.ends_with("quote-generator"));
    }
}
