//! Key-value persistence for the size category override.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::warn;
use thiserror::Error;

/// Synchronous string-valued persistence.
///
/// Writing `None` removes the key.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: Option<&str>);
}

/// An in-process store. Values are lost when it is dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: Option<&str>) {
        let mut values = self.values.borrow_mut();
        match value {
            Some(value) => {
                values.insert(key.to_string(), value.to_string());
            }
            None => {
                values.remove(key);
            }
        }
    }
}

/// Error opening or writing a [`JsonFileStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access store file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("store file {} is not a JSON object of strings: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A store persisted as a single JSON object of strings.
///
/// Every [`set`](KeyValueStore::set) writes the whole file back. Write
/// failures are logged and leave the in-memory value updated.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: RefCell<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let values = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => {
                serde_json::from_str(&content).map_err(|source| StoreError::Format {
                    path: path.clone(),
                    source,
                })?
            }
            Err(err) if err.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        Ok(Self {
            path,
            values: RefCell::new(values),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the current contents to disk.
    pub fn flush(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&*self.values.borrow()).map_err(|source| {
            StoreError::Format {
                path: self.path.clone(),
                source,
            }
        })?;
        fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: Option<&str>) {
        {
            let mut values = self.values.borrow_mut();
            match value {
                Some(value) => {
                    values.insert(key.to_string(), value.to_string());
                }
                None => {
                    values.remove(key);
                }
            }
        }
        if let Err(err) = self.flush() {
            warn!("could not persist '{key}': {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_set_and_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k"), None);
        store.set("k", Some("v"));
        assert_eq!(store.get("k").as_deref(), Some("v"));
        store.set("k", None);
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn test_json_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("prefs.json")).unwrap();
        assert_eq!(store.get("anything"), None);
    }

    #[test]
    fn test_json_store_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let store = JsonFileStore::open(&path).unwrap();
        store.set("size", Some("small"));
        store.set("other", Some("x"));
        store.set("other", None);

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("size").as_deref(), Some("small"));
        assert_eq!(reopened.get("other"), None);
    }

    #[test]
    fn test_json_store_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let err = JsonFileStore::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::Format { .. }));
        assert!(err.to_string().contains("prefs.json"));
    }

    #[test]
    fn test_json_store_failed_write_keeps_value() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be written as a file.
        let store = JsonFileStore {
            path: dir.path().to_path_buf(),
            values: RefCell::default(),
        };
        store.set("size", Some("medium"));
        assert_eq!(store.get("size").as_deref(), Some("medium"));
        assert!(store.flush().is_err());
    }
}
