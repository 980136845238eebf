//! Presentation-level configuration
//!
//! Configuration for output formatting and REPL behavior.

use quotes_domain::OutputFormat;
use std::path::{Path, PathBuf};

/// Output configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Default format for listings
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl OutputConfig {
    /// Apply the color choice process-wide
    pub fn apply(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}

/// File name of the REPL history inside the data directory
pub const HISTORY_FILE: &str = "history.txt";

/// REPL configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Show progress indicators
    pub show_progress: bool,
    /// Path to history file; `None` keeps history in memory only
    pub history_file: Option<PathBuf>,
}

impl ReplConfig {
    /// Keep the history next to the saved quotes
    pub fn in_data_dir(data_dir: &Path, show_progress: bool) -> Self {
        Self {
            show_progress,
            history_file: Some(data_dir.join(HISTORY_FILE)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_lives_in_data_dir() {
        let config = ReplConfig::in_data_dir(Path::new("/data/quotes"), false);
        assert!(!config.show_progress);
        assert_eq!(
            config.history_file,
            Some(PathBuf::from("/data/quotes/history.txt"))
        );
    }

    #[test]
    fn test_output_defaults_to_colored_text() {
        let config = OutputConfig::default();
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.color);
    }
}
