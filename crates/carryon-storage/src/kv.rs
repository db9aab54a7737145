//! Key-value stores and the typed wrapper over them.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use serde::{de::DeserializeOwned, Serialize};

use crate::StorageError;

/// A string-keyed store of string blobs.
///
/// Mirrors the browser local-storage contract: a missing key is `Ok(None)`,
/// never an error.
pub trait KvStore {
    /// Read the raw blob stored under `key`.
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous blob.
    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Deleting a missing key succeeds.
    fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// Check whether `key` holds a value.
    fn exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.get_raw(key)?.is_some())
    }

    /// List stored keys in ascending order.
    fn keys(&self) -> Result<Vec<String>, StorageError>;
}

impl<S: KvStore + ?Sized> KvStore for &S {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_raw(key)
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_raw(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        (**self).delete(key)
    }

    fn exists(&self, key: &str) -> Result<bool, StorageError> {
        (**self).exists(key)
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        (**self).keys()
    }
}

/// Volatile in-process store, used by tests and one-shot sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        Ok(entries.keys().cloned().collect())
    }
}

/// Durable store keeping one `<key>.json` file per key inside a directory.
///
/// Writes go through a sibling temp file and a rename so a crash never leaves
/// a half-written blob behind.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    /// Open (creating if needed) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| StorageError::Open {
            path: root.display().to_string(),
            source,
        })?;
        Ok(Self { root })
    }

    /// Directory backing this store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KvStore for DirStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");
        let io_err = |source| StorageError::Io {
            key: key.to_string(),
            source,
        };
        fs::write(&tmp, value).map_err(io_err)?;
        fs::rename(&tmp, &path).map_err(io_err)?;
        tracing::trace!(key, bytes = value.len(), "stored value");
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.path_for(key)?.is_file())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        let open_error = |source| StorageError::Open {
            path: self.root.display().to_string(),
            source,
        };
        let read_dir = fs::read_dir(&self.root).map_err(open_error)?;

        let mut keys = Vec::new();
        for entry in read_dir {
            let path = entry.map_err(open_error)?.path();
            if path.extension().is_some_and(|e| e == "json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    keys.push(stem.to_string());
                }
            }
        }
        keys.sort();
        Ok(keys)
    }
}

fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

/// Typed view over a [`KvStore`] with automatic JSON serialization.
///
/// # Example
///
/// ```rust
/// use carryon_storage::{Cache, MemoryStore};
///
/// let cache = Cache::new(MemoryStore::new());
/// cache.set("greeting", &vec!["hello".to_string()]).unwrap();
/// let value: Option<Vec<String>> = cache.get("greeting").unwrap();
/// assert_eq!(value, Some(vec!["hello".to_string()]));
/// ```
#[derive(Debug)]
pub struct Cache<S> {
    store: S,
}

impl<S: KvStore> Cache<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a value from the store.
    ///
    /// Returns `None` if the key doesn't exist and an error if the stored
    /// blob doesn't decode as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.store.get_raw(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Set a value in the store.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        self.store.set_raw(key, &raw)
    }

    /// Delete a value from the store.
    pub fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.store.delete(key)
    }

    /// Check if a key exists in the store.
    pub fn exists(&self, key: &str) -> Result<bool, StorageError> {
        self.store.exists(key)
    }

    /// Get all keys in the store.
    pub fn keys(&self) -> Result<Vec<String>, StorageError> {
        self.store.keys()
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Row {
        name: String,
        quantity: u32,
    }

    #[test]
    fn test_memory_store_missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get_raw("cart").unwrap(), None);
        assert!(!store.exists("cart").unwrap());
    }

    #[test]
    fn test_memory_store_set_get_delete() {
        let store = MemoryStore::new();
        store.set_raw("cart", "[]").unwrap();
        assert_eq!(store.get_raw("cart").unwrap().as_deref(), Some("[]"));

        store.delete("cart").unwrap();
        assert_eq!(store.get_raw("cart").unwrap(), None);
        // deleting twice is fine
        store.delete("cart").unwrap();
    }

    #[test]
    fn test_cache_typed_access() {
        let cache = Cache::new(MemoryStore::new());
        let rows = vec![Row {
            name: "Trolley Bag".to_string(),
            quantity: 2,
        }];
        cache.set("cart", &rows).unwrap();

        let loaded: Option<Vec<Row>> = cache.get("cart").unwrap();
        assert_eq!(loaded, Some(rows));
    }

    #[test]
    fn test_cache_malformed_blob_is_error() {
        let store = MemoryStore::new();
        store.set_raw("cart", "{not json").unwrap();
        let cache = Cache::new(&store);

        let result: Result<Option<Vec<Row>>, _> = cache.get("cart");
        assert!(matches!(result, Err(StorageError::Serialize(_))));
    }

    #[test]
    fn test_dir_store_round_trip_and_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirStore::open(dir.path().join("state")).unwrap();

        store.set_raw("selected-product", "{}").unwrap();
        store.set_raw("cart", "[]").unwrap();

        assert_eq!(store.keys().unwrap(), vec!["cart", "selected-product"]);
        assert!(store.exists("cart").unwrap());
        assert_eq!(store.get_raw("cart").unwrap().as_deref(), Some("[]"));

        store.delete("cart").unwrap();
        assert!(!store.exists("cart").unwrap());
        assert_eq!(store.get_raw("cart").unwrap(), None);
    }

    #[test]
    fn test_dir_store_keys_only_lists_json_blobs() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirStore::open(dir.path()).unwrap();
        store.set_raw("cart", "[]").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "x").unwrap();
        std::fs::write(dir.path().join(".cart.json.tmp"), "[").unwrap();

        assert_eq!(store.keys().unwrap(), vec!["cart".to_string()]);
    }

    #[test]
    fn test_dir_store_keys_reports_unreadable_root() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("state");
        let store = DirStore::open(&root).unwrap();
        std::fs::remove_dir_all(&root).unwrap();

        assert!(matches!(store.keys(), Err(StorageError::Open { .. })));
    }

    #[test]
    fn test_dir_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        DirStore::open(dir.path()).unwrap().set_raw("cart", "[1]").unwrap();

        let reopened = DirStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get_raw("cart").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_dir_store_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirStore::open(dir.path()).unwrap();

        assert!(matches!(
            store.set_raw("../escape", "x"),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(store.get_raw(""), Err(StorageError::InvalidKey(_))));
    }
}
