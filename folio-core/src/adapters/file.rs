//! JSON file storage adapter
//!
//! All keys live in a single JSON object file:
//! ```json
//! { "admin_authenticated": "true", "portfolio_projects": "[...]" }
//! ```
//!
//! Every read goes to disk, so separate processes sharing a data directory
//! observe each other's last write. Writes are read-modify-write under an
//! exclusive lock on a sidecar `.lock` file and land atomically via a temp
//! file renamed over the target. Last writer wins; there is no versioning.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tempfile::NamedTempFile;

use crate::domain::result::{Error, Result};
use crate::ports::KeyValueStorage;

type StorageMap = BTreeMap<String, String>;

pub struct JsonFileStorage {
    path: PathBuf,
    lock_path: PathBuf,
}

impl JsonFileStorage {
    /// Create a storage backed by the file at `path`.
    ///
    /// The file (and its parent directory) is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut lock_name = path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "storage.json".into());
        lock_name.push(".lock");
        let lock_path = path.with_file_name(lock_name);
        Self { path, lock_path }
    }

    /// Path of the backing JSON file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open_lock_file(&self) -> Result<File> {
        if let Some(dir) = self.lock_path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&self.lock_path)?;
        Ok(file)
    }

    fn read_map(&self) -> Result<StorageMap> {
        if !self.path.exists() {
            return Ok(StorageMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(StorageMap::new());
        }
        serde_json::from_str(&content).map_err(|e| {
            Error::storage(format!(
                "{} is not a valid storage file: {}",
                self.path.display(),
                e
            ))
        })
    }

    fn write_map(&self, map: &StorageMap) -> Result<()> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let mut tmp = NamedTempFile::new_in(&dir)?;
        serde_json::to_writer_pretty(&mut tmp, map)?;
        tmp.write_all(b"\n")?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)
            .map_err(|e| Error::storage(format!("Failed to replace {}: {}", self.path.display(), e)))?;
        Ok(())
    }

    /// Run `f` while holding the sidecar lock (shared or exclusive)
    fn locked<T>(&self, exclusive: bool, f: impl FnOnce() -> Result<T>) -> Result<T> {
        let lock = self.open_lock_file()?;
        if exclusive {
            FileExt::lock_exclusive(&lock)?;
        } else {
            FileExt::lock_shared(&lock)?;
        }
        let result = f();
        let _ = FileExt::unlock(&lock);
        result
    }

    fn modify(&self, f: impl FnOnce(&mut StorageMap) -> bool) -> Result<()> {
        self.locked(true, || {
            let mut map = self.read_map()?;
            if f(&mut map) {
                self.write_map(&map)?;
            }
            Ok(())
        })
    }
}

impl KeyValueStorage for JsonFileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        self.locked(false, || Ok(self.read_map()?.get(key).cloned()))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.modify(|map| {
            map.insert(key.to_string(), value.to_string());
            true
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        self.modify(|map| map.remove(key).is_some())
    }

    fn keys(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        self.locked(false, || Ok(self.read_map()?.into_keys().collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("storage.json"));

        assert_eq!(storage.get("anything").unwrap(), None);
        assert!(storage.keys().unwrap().is_empty());
        storage.remove("anything").unwrap();
        assert!(!storage.path().exists());
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let storage = JsonFileStorage::new(&path);
        storage.set("admin_authenticated", "true").unwrap();
        storage.set("portfolio_projects", "[]").unwrap();

        let reopened = JsonFileStorage::new(&path);
        assert_eq!(reopened.get("admin_authenticated").unwrap().as_deref(), Some("true"));
        assert_eq!(
            reopened.keys().unwrap(),
            vec!["admin_authenticated", "portfolio_projects"]
        );

        reopened.remove("admin_authenticated").unwrap();
        assert_eq!(storage.get("admin_authenticated").unwrap(), None);
    }

    #[test]
    fn test_file_is_a_plain_json_object() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        let storage = JsonFileStorage::new(&path);
        storage.set("resume_name", "cv.pdf").unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["resume_name"], "cv.pdf");
    }

    #[test]
    fn test_malformed_file_is_reported_and_not_clobbered() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "{ not json").unwrap();

        let storage = JsonFileStorage::new(&path);
        assert!(matches!(storage.get("k"), Err(Error::Storage(_))));
        assert!(matches!(storage.set("k", "v"), Err(Error::Storage(_))));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json");
    }
}
