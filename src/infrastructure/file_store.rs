//! File-backed key-value store

use crate::error::{Result, RosterError};
use crate::infrastructure::KeyValueStore;
use std::fs;
use std::path::{Path, PathBuf};

/// Stores each key as one file inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: PathBuf) -> Self {
        FileStore { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolve the file backing `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty()
            || key == "."
            || key == ".."
            || key.contains('/')
            || key.contains('\\')
        {
            return Err(RosterError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(RosterError::Storage(format!(
                "cannot read '{}': {}",
                path.display(),
                e
            ))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;

        fs::create_dir_all(&self.dir).map_err(|e| {
            RosterError::Storage(format!(
                "cannot create store directory '{}': {}",
                self.dir.display(),
                e
            ))
        })?;

        // Write a sibling temp file and rename it so a failed write never
        // truncates the previous value.
        let tmp = self.dir.join(format!("{}.tmp", key));
        fs::write(&tmp, value.as_bytes()).map_err(|e| {
            RosterError::Storage(format!("cannot write '{}': {}", tmp.display(), e))
        })?;

        fs::rename(&tmp, &path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            RosterError::Storage(format!("cannot replace '{}': {}", path.display(), e))
        })?;

        tracing::debug!(path = %path.display(), bytes = value.len(), "Value stored");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_missing_returns_none() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join("store"));
        assert_eq!(store.get("data").unwrap(), None);
    }

    #[test]
    fn test_set_creates_directory_and_file() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().join("store"));

        store.set("data", "[]").unwrap();

        let path = temp.path().join("store").join("data");
        assert_eq!(fs::read_to_string(path).unwrap(), "[]");
        assert!(!temp.path().join("store").join("data.tmp").exists());
        assert_eq!(store.get("data").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_set_overwrites() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());

        store.set("data", "first").unwrap();
        store.set("data", "second").unwrap();

        assert_eq!(store.get("data").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_invalid_keys_rejected() {
        let temp = TempDir::new().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());

        for key in ["", ".", "..", "a/b", "a\\b"] {
            assert!(matches!(
                store.set(key, "x"),
                Err(RosterError::InvalidKey(_))
            ));
            assert!(matches!(store.get(key), Err(RosterError::InvalidKey(_))));
        }
    }

    #[test]
    fn test_unreadable_value_is_storage_error() {
        let temp = TempDir::new().unwrap();
        // A directory where the value file should be cannot be read as text
        fs::create_dir(temp.path().join("data")).unwrap();
        let store = FileStore::new(temp.path().to_path_buf());

        assert!(matches!(store.get("data"), Err(RosterError::Storage(_))));
    }

    #[test]
    fn test_blocked_write_keeps_no_temp_file() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("data")).unwrap();
        fs::write(temp.path().join("data").join("keep"), "x").unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());

        assert!(matches!(
            store.set("data", "[]"),
            Err(RosterError::Storage(_))
        ));
        assert!(!temp.path().join("data.tmp").exists());
    }
}
