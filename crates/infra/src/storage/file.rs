//! JSON-file key-value store
//!
//! The whole map is rewritten on every change via a sibling temp file and a
//! rename.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use bizhub_core::KeyValueStore;
use bizhub_domain::{BizHubError, Result};
use parking_lot::Mutex;
use tracing::debug;

use crate::errors::InfraError;

pub struct FileKeyValueStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl FileKeyValueStore {
    /// Open the store, creating nothing until the first write.
    ///
    /// # Errors
    /// Returns `BizHubError::Storage` if the file exists but is not a JSON
    /// object of strings.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => serde_json::from_str(&contents).map_err(|e| {
                BizHubError::Storage(format!("corrupt storage file {}: {}", path.display(), e))
            })?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(InfraError::from(err).into()),
        };
        debug!(path = %path.display(), keys = values.len(), "storage opened");
        Ok(Self { path, values: Mutex::new(values) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, values: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(InfraError::from)?;
        }
        let contents = serde_json::to_string_pretty(values).map_err(InfraError::from)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents).map_err(InfraError::from)?;
        fs::rename(&tmp, &self.path).map_err(InfraError::from)?;
        Ok(())
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.lock();
        let mut next = values.clone();
        next.insert(key.to_string(), value.to_string());
        self.persist(&next)?;
        *values = next;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut values = self.values.lock();
        if !values.contains_key(key) {
            return Ok(());
        }
        let mut next = values.clone();
        next.remove(key);
        self.persist(&next)?;
        *values = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let store = FileKeyValueStore::open(&path).unwrap();
        store.set("theme", "dark").unwrap();
        store.set("session_token", "abc").unwrap();
        store.remove("session_token").unwrap();

        let reopened = FileKeyValueStore::open(&path).unwrap();
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.get("session_token").unwrap(), None);
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::open(dir.path().join("absent.json")).unwrap();
        assert_eq!(store.get("theme").unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "[1, 2").unwrap();

        assert!(matches!(FileKeyValueStore::open(&path), Err(BizHubError::Storage(_))));
    }

    #[test]
    fn failed_write_leaves_values_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        let store = FileKeyValueStore::open(&path).unwrap();
        store.set("session_token", "abc").unwrap();

        // A directory at the temp path makes every write fail.
        fs::create_dir(path.with_extension("json.tmp")).unwrap();

        assert!(matches!(store.set("theme", "dark"), Err(BizHubError::Storage(_))));
        assert_eq!(store.get("theme").unwrap(), None);

        assert!(store.remove("session_token").is_err());
        assert_eq!(store.get("session_token").unwrap().as_deref(), Some("abc"));

        let reopened = FileKeyValueStore::open(&path).unwrap();
        assert_eq!(reopened.get("theme").unwrap(), None);
        assert_eq!(reopened.get("session_token").unwrap().as_deref(), Some("abc"));
    }
}
