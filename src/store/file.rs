//! File-backed store: one file per key under a root directory.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use super::{KeyValueStore, StoreError};

#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path backing `key`. Keys may not escape the root.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let rel = Path::new(key);
        let valid = !key.is_empty()
            && rel
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(rel))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Read { path, source }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let write_err = |source| StoreError::Write {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }

        // Temp file + rename so a crash never leaves a half-written value
        let temp_path = path.with_extension("tmp");
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(write_err)?;
        temp_file.write_all(value.as_bytes()).map_err(write_err)?;
        temp_file.sync_all().map_err(write_err)?;

        std::fs::rename(&temp_path, &path).map_err(write_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_key_is_none() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.get("chance-moonmen").unwrap(), None);
    }

    #[test]
    fn test_set_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());

        store.set("tvdb_cache/tvdb_1.json", "{}").unwrap();

        assert!(dir.path().join("tvdb_cache/tvdb_1.json").exists());
        assert_eq!(store.get("tvdb_cache/tvdb_1.json").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_set_overwrites() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());

        store.set("chance-x", "10").unwrap();
        store.set("chance-x", "9").unwrap();

        assert_eq!(store.get("chance-x").unwrap().as_deref(), Some("9"));
    }

    #[test]
    fn test_rejects_escaping_keys() {
        let store = FileStore::new("/tmp/store");
        assert!(matches!(store.path_for("../etc/passwd"), Err(StoreError::InvalidKey(_))));
        assert!(matches!(store.path_for("/abs"), Err(StoreError::InvalidKey(_))));
        assert!(matches!(store.path_for(""), Err(StoreError::InvalidKey(_))));
    }
}
