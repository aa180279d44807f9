use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::backend::StorageBackend;

/// In-memory StorageBackend for testing and as a last-resort fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserProfile;
    use crate::session::{SessionStore, STATE_KEY, TOKEN_KEY};

    fn profile() -> UserProfile {
        UserProfile {
            id: "1".to_string(),
            name: "A".to_string(),
            username: "a".to_string(),
            email: "a@b.com".to_string(),
            bio: None,
            avatar: None,
        }
    }

    #[test]
    fn test_load_empty_is_anonymous() {
        let store = SessionStore::new(MemoryStore::new());
        let session = store.load();
        assert!(!session.is_authenticated);
        assert!(session.user.is_none());
        assert!(session.token.is_none());
    }

    #[test]
    fn test_login_persists_token_and_snapshot() {
        let backend = MemoryStore::new();
        let store = SessionStore::new(backend.clone());

        let session = store.login("t1", profile());
        assert!(session.is_authenticated);
        assert_eq!(session.token.as_deref(), Some("t1"));
        assert_eq!(session.user.as_ref().unwrap().name, "A");

        // both keys written in the same operation
        assert_eq!(backend.get(TOKEN_KEY).as_deref(), Some("t1"));
        let snapshot = backend.get(STATE_KEY).unwrap();
        assert!(snapshot.contains("\"isAuthenticated\":true"));
        assert!(snapshot.contains("\"token\":\"t1\""));
    }

    #[test]
    fn test_rehydrate_roundtrip() {
        let backend = MemoryStore::new();
        SessionStore::new(backend.clone()).login("t1", profile());

        // a fresh store over the same backend sees the persisted session
        let session = SessionStore::new(backend).load();
        assert!(session.is_authenticated);
        assert_eq!(session.token.as_deref(), Some("t1"));
        assert_eq!(session.user.as_ref().unwrap().id, "1");
    }

    #[test]
    fn test_logout_clears_storage() {
        let backend = MemoryStore::new();
        let store = SessionStore::new(backend.clone());
        store.login("t1", profile());

        let session = store.logout();
        assert!(!session.is_authenticated);
        assert_eq!(backend.get(TOKEN_KEY), None);
        assert!(!SessionStore::new(backend).load().is_authenticated);
    }

    #[test]
    fn test_logout_is_idempotent() {
        let store = SessionStore::new(MemoryStore::new());
        let first = store.logout();
        let second = store.logout();
        assert_eq!(first, second);
        assert!(!second.is_authenticated);
    }

    #[test]
    fn test_update_user_keeps_token() {
        let backend = MemoryStore::new();
        let store = SessionStore::new(backend.clone());
        store.login("t1", profile());

        let mut renamed = profile();
        renamed.name = "B".to_string();
        let session = store.update_user(renamed);

        assert_eq!(session.user.as_ref().unwrap().name, "B");
        assert_eq!(session.token.as_deref(), Some("t1"));
        assert_eq!(backend.get(TOKEN_KEY).as_deref(), Some("t1"));
    }

    #[test]
    fn test_corrupt_snapshot_degrades_to_anonymous() {
        let backend = MemoryStore::new();
        backend.set(STATE_KEY, "not json");
        let session = SessionStore::new(backend).load();
        assert!(!session.is_authenticated);
    }
}
