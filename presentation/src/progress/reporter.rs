//! Progress reporting for remote sync

use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use quotes_application::{SyncError, SyncProgressNotifier, SyncReport};
use std::sync::Mutex;
use std::time::Duration;

/// Reports sync progress with a spinner
pub struct SyncSpinner {
    bar: Mutex<Option<ProgressBar>>,
}

impl SyncSpinner {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn finish(&self, message: String) {
        if let Ok(mut bar) = self.bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_with_message(message);
        }
    }
}

impl Default for SyncSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncProgressNotifier for SyncSpinner {
    fn on_sync_start(&self) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message("Syncing with server...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_sync_complete(&self, report: &SyncReport) {
        self.finish(ConsoleFormatter::sync_report(report));
    }

    fn on_sync_failed(&self, error: &SyncError) {
        self.finish(format!("{} {}", "x".red(), error));
    }
}

/// Simple text-based progress (no fancy UI)
///
/// Used by the REPL, where a spinner would fight with the prompt.
pub struct SimpleSyncProgress;

impl SyncProgressNotifier for SimpleSyncProgress {
    fn on_sync_start(&self) {
        println!("{} {}", "->".cyan(), "Syncing with server...".dimmed());
    }

    fn on_sync_complete(&self, report: &SyncReport) {
        println!("  {}", ConsoleFormatter::sync_report(report));
    }

    fn on_sync_failed(&self, error: &SyncError) {
        println!("  {} {}", "x".red(), error);
    }
}
