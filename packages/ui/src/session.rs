//! Shared session-store constructor for all platforms.
//!
//! Returns a [`store::SessionStore`] backed by the appropriate
//! [`store::StorageBackend`]:
//! - **Web** (WASM + `web` feature): browser localStorage
//! - **Native**: flat files under the platform data directory
//! - **WASM without `web`**: in-memory fallback (nothing persists)

use store::{SessionStore, StorageBackend};

/// Create a platform-appropriate session store.
///
/// Cheap to construct; call it per operation rather than holding one.
pub fn make_session_store() -> SessionStore<impl StorageBackend> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionStore::new(store::LocalStorageStore::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        SessionStore::new(store::MemoryStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("linkdeck");
        SessionStore::new(store::FileStore::new(base))
    }
}
