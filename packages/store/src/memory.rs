use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::tokens::TokenStore;

/// In-memory TokenStore for tests. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one key.
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl TokenStore for MemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    async fn remove(&self, key: &str) {
        self.values.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{CredentialScope, TokenKeys};

    #[tokio::test]
    async fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get("token").await.is_none());

        store.set("token", "abc").await;
        assert_eq!(store.get("token").await.as_deref(), Some("abc"));

        store.remove("token").await;
        assert!(store.get("token").await.is_none());
    }

    #[tokio::test]
    async fn test_scopes_do_not_share_keys() {
        let keys = TokenKeys::default();
        let store = MemoryStore::new();

        store.set(keys.key(CredentialScope::User), "user-token").await;
        store.set(keys.key(CredentialScope::Admin), "admin-token").await;
        store.remove(keys.key(CredentialScope::User)).await;

        assert!(store.get(keys.key(CredentialScope::User)).await.is_none());
        assert_eq!(
            store.get(keys.key(CredentialScope::Admin)).await.as_deref(),
            Some("admin-token")
        );
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MemoryStore::with("token", "t1");
        let other = store.clone();
        other.remove("token").await;
        assert!(store.get("token").await.is_none());
    }
}
