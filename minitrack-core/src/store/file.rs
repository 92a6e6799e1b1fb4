use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::{decode, encode, DocumentStore, EMPTY_DOCUMENT};
use crate::error::StoreError;
use crate::models::Document;

/// Stores the document as a single pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Checks if the backing file exists on disk.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    /// Replaces the file contents via a sibling temp file and a rename.
    fn write_atomic(&self, contents: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        let temp_path = self.temp_path();

        let mut file = File::create(&temp_path).map_err(|e| StoreError::io(&temp_path, e))?;
        file.write_all(contents.as_bytes())
            .map_err(|e| StoreError::io(&temp_path, e))?;
        file.sync_all().map_err(|e| StoreError::io(&temp_path, e))?;

        fs::rename(&temp_path, &self.path).map_err(|e| StoreError::io(&self.path, e))?;

        Ok(())
    }
}

impl DocumentStore for JsonFileStore {
    fn load(&self) -> Document {
        let origin = self.path.display().to_string();

        match fs::read_to_string(&self.path) {
            Ok(text) => {
                tracing::debug!("Loaded {} bytes from {}", text.len(), origin);
                decode(&text, &origin)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No data file at {}, initializing", origin);
                if let Err(e) = self.write_atomic(EMPTY_DOCUMENT) {
                    tracing::warn!("Failed to initialize data file: {}", e);
                }
                Document::new()
            }
            Err(e) => {
                tracing::warn!("Failed to read {}: {}", origin, e);
                Document::new()
            }
        }
    }

    fn save(&self, doc: &Document) -> Result<(), StoreError> {
        let text = encode(doc)?;
        self.write_atomic(&text)?;
        tracing::debug!("Saved {} army(ies) to {}", doc.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Status, Unit};
    use tempfile::TempDir;

    fn test_store() -> (JsonFileStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().join("data.json"));
        (store, temp_dir)
    }

    #[test]
    fn test_load_missing_initializes_file() {
        let (store, _temp) = test_store();
        assert!(!store.exists());

        let doc = store.load();

        assert!(doc.is_empty());
        assert!(store.exists());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "{}");
    }

    #[test]
    fn test_load_malformed_returns_empty() {
        let (store, _temp) = test_store();
        fs::write(store.path(), "{\"Orcs\": {").unwrap();

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_invalid_utf8_returns_empty() {
        let (store, _temp) = test_store();
        fs::write(store.path(), [0xff, 0xfe, 0x00]).unwrap();

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("data");
        let store = JsonFileStore::new(nested.join("data.json"));

        store.save(&Document::new()).unwrap();

        assert!(nested.exists());
        assert!(store.exists());
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let (store, _temp) = test_store();

        let mut doc = Document::new();
        doc.army_or_insert("Nécrons").insert(
            "Guerriers",
            Unit::new("Infanterie", 10).with_status(Status::Work),
        );

        store.save(&doc).unwrap();
        let loaded = store.load();

        assert_eq!(loaded, doc);
        let text = fs::read_to_string(store.path()).unwrap();
        assert!(text.contains("Nécrons"));
    }

    #[test]
    fn test_save_load_is_fixed_point_on_disk() {
        let (store, _temp) = test_store();

        let mut doc = Document::new();
        doc.army_or_insert("Orcs")
            .insert("Boyz", Unit::new("Infantry", 20).with_rare(true));
        store.save(&doc).unwrap();
        let first = fs::read_to_string(store.path()).unwrap();

        store.save(&store.load()).unwrap();
        let second = fs::read_to_string(store.path()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_overwrite_existing_document() {
        let (store, _temp) = test_store();

        let mut doc = Document::new();
        doc.army_or_insert("First");
        store.save(&doc).unwrap();

        let mut doc = Document::new();
        doc.army_or_insert("Second");
        store.save(&doc).unwrap();

        let names: Vec<String> = store.load().army_names().map(String::from).collect();
        assert_eq!(names, vec!["Second".to_string()]);
    }

    #[test]
    fn test_save_into_unwritable_location_fails() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let store = JsonFileStore::new(blocker.join("data.json"));

        let result = store.save(&Document::new());

        assert!(matches!(result, Err(StoreError::Io { .. })));
    }
}
