//! Key-value persistence used for credentials and the geocode cache.
//!
//! The core treats persistence as an opaque string-to-string store. Every
//! failure surfaces as [`ProfileDirError::StorageUnavailable`].
//!
//! # Public API
//! - [`KeyValueStore`]: Storage collaborator trait
//! - [`FileStore`]: One file per key under a directory, file named by the key's md5 digest
//! - [`MemoryStore`]: In-process store for tests and ephemeral sessions
//! - Storage key constants shared by the session and the geocode cache

use crate::core::error::{ProfileDirError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const USER_TOKEN_KEY: &str = "userToken";
pub const USER_EMAIL_KEY: &str = "email";
pub const GEOCODE_CACHE_KEY: &str = "geocodeCache";

pub trait KeyValueStore {
    /// `Ok(None)` when the key has never been written or was removed.
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{:x}", md5::compute(key.as_bytes())))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        log::debug!("Reading key '{key}' from {}", path.display());

        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                log::error!("Failed to read '{}': {}", path.display(), e);
                Err(ProfileDirError::storage_unavailable(key, e))
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if let Err(e) = fs::create_dir_all(&self.root) {
            log::error!(
                "Failed to create store directory '{}': {}",
                self.root.display(),
                e
            );
            return Err(ProfileDirError::storage_unavailable(key, e));
        }

        let path = self.path_for(key);
        if let Err(e) = fs::write(&path, value) {
            log::error!("Failed to write '{}': {}", path.display(), e);
            return Err(ProfileDirError::storage_unavailable(key, e));
        }

        log::debug!("Stored key '{key}' ({} bytes)", value.len());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => {
                log::error!("Failed to remove '{}': {}", path.display(), e);
                Err(ProfileDirError::storage_unavailable(key, e))
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_round_trip() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let store = FileStore::new(temp_dir.path().join("store"));

        assert_eq!(store.get(USER_TOKEN_KEY)?, None);
        store.set(USER_TOKEN_KEY, "QpwL5tke4Pnpja7X4")?;
        assert_eq!(store.get(USER_TOKEN_KEY)?.as_deref(), Some("QpwL5tke4Pnpja7X4"));

        store.set(USER_TOKEN_KEY, "replaced")?;
        assert_eq!(store.get(USER_TOKEN_KEY)?.as_deref(), Some("replaced"));
        Ok(())
    }

    #[test]
    fn test_file_store_keys_are_isolated() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let store = FileStore::new(temp_dir.path());

        store.set(USER_TOKEN_KEY, "token")?;
        store.set(USER_EMAIL_KEY, "eve.holt@reqres.in")?;
        assert_eq!(store.get(USER_TOKEN_KEY)?.as_deref(), Some("token"));
        assert_eq!(store.get(USER_EMAIL_KEY)?.as_deref(), Some("eve.holt@reqres.in"));
        Ok(())
    }

    #[test]
    fn test_file_store_remove_missing_key_is_ok() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let store = FileStore::new(temp_dir.path());

        store.remove(USER_EMAIL_KEY)?;
        store.set(USER_EMAIL_KEY, "x")?;
        store.remove(USER_EMAIL_KEY)?;
        assert_eq!(store.get(USER_EMAIL_KEY)?, None);
        Ok(())
    }

    #[test]
    fn test_file_store_unwritable_root_is_storage_unavailable() -> Result<()> {
        let temp_dir = TempDir::new()?;
        // A regular file where the store directory should be
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a directory")?;
        let store = FileStore::new(&blocker);

        let err = store.set(GEOCODE_CACHE_KEY, "{}").unwrap_err();
        assert!(matches!(err, ProfileDirError::StorageUnavailable { .. }));
        Ok(())
    }

    #[test]
    fn test_memory_store() -> Result<()> {
        let store = MemoryStore::new();
        assert!(store.is_empty());

        store.set("a", "1")?;
        store.set("b", "2")?;
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("a")?.as_deref(), Some("1"));

        store.remove("a")?;
        assert_eq!(store.get("a")?, None);
        Ok(())
    }

    #[test]
    fn test_store_usable_through_reference() -> Result<()> {
        fn write_through(store: impl KeyValueStore) -> Result<()> {
            store.set("k", "v")
        }

        let store = MemoryStore::new();
        write_through(&store)?;
        assert_eq!(store.get("k")?.as_deref(), Some("v"));
        Ok(())
    }
}
