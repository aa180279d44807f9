//! # Browser localStorage backend — web platform
//!
//! [`LocalStorageStore`] is the [`StorageBackend`] implementation used on the
//! **web platform**. It persists the session keys into `window.localStorage`,
//! the same location the service's earlier clients used, so an existing
//! browser session survives an upgrade.
//!
//! All methods silently swallow errors (returning `None` for reads, doing
//! nothing for writes). A browser with storage disabled degrades to "no
//! persisted session" rather than crashing; the authoritative state always
//! lives on the server.

use crate::backend::StorageBackend;

/// localStorage-backed StorageBackend for the web platform.
///
/// Zero-size and `Clone`-friendly: the `Storage` handle is re-acquired from
/// `window` on every operation, which the browser serves from cache.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl StorageBackend for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
