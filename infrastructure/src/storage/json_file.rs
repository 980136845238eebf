//! File-backed persistent state.
//!
//! One file per key inside the data directory:
//!
//! - `quotes.json`: the serialized quote array
//! - `last_category`: the last selected category as plain text

use quotes_application::{QuoteStorage, StorageError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const QUOTES_FILE: &str = "quotes.json";
pub const CATEGORY_FILE: &str = "last_category";

/// [`QuoteStorage`] adapter writing plain files under a data directory.
///
/// The directory is created on first write, so reading from a fresh
/// directory simply reports nothing saved.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The data directory this storage writes to
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read(&self, key: &'static str) -> Result<Option<String>, StorageError> {
        let path = self.dir.join(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read {
                key,
                message: format!("{}: {}", path.display(), e),
            }),
        }
    }

    fn write(&self, key: &'static str, contents: &str) -> Result<(), StorageError> {
        let to_error = |e: std::io::Error| StorageError::Write {
            key,
            message: format!("{}: {}", self.dir.join(key).display(), e),
        };

        fs::create_dir_all(&self.dir).map_err(to_error)?;

        // Readers never observe a partially written entry
        let path = self.dir.join(key);
        let tmp = self.dir.join(format!(".{}.tmp", key));
        fs::write(&tmp, contents).map_err(to_error)?;
        fs::rename(&tmp, &path).map_err(to_error)?;

        debug!("Wrote {} ({} bytes)", path.display(), contents.len());
        Ok(())
    }
}

impl QuoteStorage for JsonFileStorage {
    fn load_quotes(&self) -> Result<Option<String>, StorageError> {
        self.read(QUOTES_FILE)
    }

    fn save_quotes(&self, serialized: &str) -> Result<(), StorageError> {
        self.write(QUOTES_FILE, serialized)
    }

    fn load_last_category(&self) -> Result<Option<String>, StorageError> {
        Ok(self
            .read(CATEGORY_FILE)?
            .map(|raw| raw.trim().to_string())
            .filter(|category| !category.is_empty()))
    }

    fn save_last_category(&self, category: &str) -> Result<(), StorageError> {
        self.write(CATEGORY_FILE, category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_directory_has_nothing_saved() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("not-yet-created"));

        assert_eq!(storage.load_quotes().unwrap(), None);
        assert_eq!(storage.load_last_category().unwrap(), None);
    }

    #[test]
    fn test_save_and_load_quotes() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("nested").join("data"));
        let raw = r#"[{"text":"A","category":"B"}]"#;

        storage.save_quotes(raw).unwrap();

        assert_eq!(storage.load_quotes().unwrap().as_deref(), Some(raw));
        assert!(storage.dir().join(QUOTES_FILE).exists());
        assert!(!storage.dir().join(".quotes.json.tmp").exists());
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path());

        storage.save_quotes("[]").unwrap();
        storage.save_quotes(r#"[{"text":"A","category":"B"}]"#).unwrap();

        assert!(storage.load_quotes().unwrap().unwrap().contains("\"A\""));
    }

    #[test]
    fn test_last_category_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path());

        std::fs::write(dir.path().join(CATEGORY_FILE), "Life\n").unwrap();
        assert_eq!(
            storage.load_last_category().unwrap().as_deref(),
            Some("Life")
        );

        storage.save_last_category("all").unwrap();
        assert_eq!(storage.load_last_category().unwrap().as_deref(), Some("all"));
    }

    #[test]
    fn test_unreadable_entry_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be cannot be read as text
        std::fs::create_dir(dir.path().join(QUOTES_FILE)).unwrap();
        let storage = JsonFileStorage::new(dir.path());

        assert!(matches!(
            storage.load_quotes(),
            Err(StorageError::Read { key: QUOTES_FILE, .. })
        ));
    }
}
