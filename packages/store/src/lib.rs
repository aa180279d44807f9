pub mod models;

mod backend;
pub use backend::StorageBackend;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

mod session;
pub use session::{SessionStore, STATE_KEY, TOKEN_KEY};

pub use models::{Session, UserProfile};
