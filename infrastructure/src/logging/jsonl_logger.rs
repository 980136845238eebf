//! JSONL file writer for activity events.
//!
//! Every [`ActivityEvent`] becomes one line: `type`, an RFC 3339
//! `timestamp`, then the event's fields at the top level.

use quotes_application::{ActivityEvent, ActivityLogger};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// One line of `activity.jsonl`
#[derive(Serialize)]
struct ActivityRecord<'a> {
    #[serde(rename = "type")]
    event_type: &'a str,
    timestamp: String,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl<'a> ActivityRecord<'a> {
    fn from_event(event: &'a ActivityEvent) -> Self {
        let fields = match &event.payload {
            Value::Object(map) => map.clone(),
            Value::Null => Map::new(),
            other => Map::from_iter([("detail".to_string(), other.clone())]),
        };
        Self {
            event_type: event.event_type,
            timestamp: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            fields,
        }
    }
}

/// Activity log appending one JSON object per line.
///
/// Each record goes out as a single `write_all` on an append-mode file.
pub struct JsonlActivityLogger {
    file: Mutex<File>,
    path: PathBuf,
}

impl JsonlActivityLogger {
    /// Open (or create) the log for appending, creating its directory.
    ///
    /// Returns `None` when the file cannot be opened; activity logging is
    /// then skipped for the run.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!("Activity log disabled, cannot create {}: {}", parent.display(), e);
            return None;
        }

        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Some(Self {
                file: Mutex::new(file),
                path: path.to_path_buf(),
            }),
            Err(e) => {
                warn!("Activity log disabled, cannot open {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ActivityLogger for JsonlActivityLogger {
    fn log(&self, event: ActivityEvent) {
        let record = ActivityRecord::from_event(&event);
        let mut line = match serde_json::to_vec(&record) {
            Ok(line) => line,
            Err(e) => {
                warn!("Skipping unserializable '{}' event: {}", event.event_type, e);
                return;
            }
        };
        line.push(b'\n');

        if let Ok(mut file) = self.file.lock()
            && let Err(e) = file.write_all(&line)
        {
            warn!("Could not write activity log {}: {}", self.path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_lines(path: &Path) -> Vec<serde_json::Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_jsonl_logger_writes_valid_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("activity.jsonl");
        let logger = JsonlActivityLogger::new(&path).unwrap();

        logger.log(ActivityEvent::new(
            "quote_added",
            serde_json::json!({ "text": "Breathe.", "category": "Life" }),
        ));
        logger.log(ActivityEvent::new(
            "quotes_synced",
            serde_json::json!({ "removed": 5, "added": 5, "total": 9 }),
        ));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        for value in &lines {
            assert!(value.get("type").is_some());
            assert!(value.get("timestamp").is_some());
        }
        assert_eq!(lines[0]["type"], "quote_added");
        assert_eq!(lines[0]["category"], "Life");
        assert_eq!(lines[1]["type"], "quotes_synced");
        assert_eq!(lines[1]["added"], 5);
    }

    #[test]
    fn test_jsonl_logger_appends_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("activity.jsonl");

        for i in 0..2 {
            let logger = JsonlActivityLogger::new(&path).unwrap();
            logger.log(ActivityEvent::new(
                "category_selected",
                serde_json::json!({ "run": i }),
            ));
        }

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1]["run"], 1);
    }

    #[test]
    fn test_jsonl_logger_wraps_non_object_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("activity.jsonl");
        let logger = JsonlActivityLogger::new(&path).unwrap();

        logger.log(ActivityEvent::new(
            "sync_failed",
            serde_json::json!("connection refused"),
        ));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines[0]["type"], "sync_failed");
        assert_eq!(lines[0]["detail"], "connection refused");
    }
}
