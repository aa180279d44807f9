//! # Filesystem-backed storage
//!
//! [`FileStore`] is a [`StorageBackend`] implementation that persists each key
//! as a flat file under a base directory. It is used on native builds to
//! retain the session across app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── linkdeck_token      # raw bearer token
//! └── auth-storage        # serialised Session snapshot (JSON)
//! ```
//!
//! Pass a platform-appropriate base, e.g. `dirs::data_dir().join("linkdeck")`.
//! Read errors degrade to `None`; write errors are swallowed, matching the
//! storage contract.

use std::path::PathBuf;

use crate::backend::StorageBackend;

/// Filesystem-backed StorageBackend for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl StorageBackend for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.key_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        let _ = std::fs::create_dir_all(&self.base);
        let _ = std::fs::write(self.key_path(key), value);
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.key_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        store.set("auth-storage", "{\"token\":null}");

        let reopened = FileStore::new(dir.path().to_path_buf());
        assert_eq!(
            reopened.get("auth-storage").as_deref(),
            Some("{\"token\":null}")
        );

        reopened.remove("auth-storage");
        assert_eq!(store.get("auth-storage"), None);
    }

    #[test]
    fn test_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert_eq!(store.get("linkdeck_token"), None);
        // removing a missing key is a no-op
        store.remove("linkdeck_token");
    }
}
