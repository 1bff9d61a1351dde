//! Key-value storage for the serialized cube state.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use parking_lot::Mutex;

/// External key-value store.
pub trait StateStore {
    /// Returns the value stored under `key`, or `None` if there is none.
    fn load(&self, key: &str) -> Result<Option<String>>;
    /// Stores `value` under `key`, replacing any existing value.
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: StateStore + ?Sized> StateStore for &T {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }
    fn save(&self, key: &str, value: &str) -> Result<()> {
        (**self).save(key, value)
    }
}

/// In-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<BTreeMap<String, String>>,
}
impl MemoryStore {
    /// Constructs an empty store.
    pub fn new() -> Self {
        Self::default()
    }
    /// Constructs a store containing a single value.
    pub fn with_value(key: &str, value: &str) -> Self {
        let ret = Self::new();
        ret.values.lock().insert(key.to_owned(), value.to_owned());
        ret
    }
    /// Returns the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }
}
impl StateStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get(key))
    }
    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.values.lock().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Store backed by a JSON object in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    path: PathBuf,
}
impl FileStore {
    /// Constructs a store for a file, which need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
    /// Returns the path of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = std::fs::read_to_string(&self.path)
            .wrap_err_with(|| format!("error reading {}", self.path.display()))?;
        serde_json::from_str(&contents)
            .wrap_err_with(|| format!("error parsing {}", self.path.display()))
    }
}
impl StateStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }
    fn save(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.read_all()?;
        values.insert(key.to_owned(), value.to_owned());
        if let Some(p) = self.path.parent() {
            std::fs::create_dir_all(p)?;
        }
        let file = std::fs::File::create(&self.path)?;
        serde_json::to_writer_pretty(file, &values)?;
        log::debug!("saved {key:?} to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert_eq!(None, store.load("fd").unwrap());
        store.save("fd", "abc").unwrap();
        store.save("fd", "def").unwrap();
        assert_eq!(Some("def".to_owned()), store.load("fd").unwrap());
        let seeded = MemoryStore::with_value("k", "x");
        assert_eq!(Some("x".to_owned()), seeded.get("k"));
    }

    #[test]
    fn test_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("sub").join("state.json"));
        assert_eq!(None, store.load("fd").unwrap());

        store.save("fd", "abc").unwrap();
        store.save("other", "123").unwrap();
        assert_eq!(Some("abc".to_owned()), store.load("fd").unwrap());

        let reopened = FileStore::new(store.path());
        assert_eq!(Some("123".to_owned()), reopened.load("other").unwrap());
    }

    #[test]
    fn test_file_store_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = FileStore::new(&path);
        assert!(store.load("fd").is_err());
        assert!(store.save("fd", "abc").is_err());
    }
}
