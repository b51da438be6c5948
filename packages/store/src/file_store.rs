//! # Filesystem-backed token store
//!
//! [`FileStore`] persists credentials for native builds (desktop previews and
//! `cargo test`). Each key is a file containing the raw token:
//!
//! ```text
//! <base_dir>/
//! └── tokens/
//!     ├── token
//!     └── admin_token
//! ```
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base.

use std::path::PathBuf;

use crate::tokens::TokenStore;

/// Filesystem-backed TokenStore for native platforms.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base.join("tokens").join(key)
    }
}

impl TokenStore for FileStore {
    async fn get(&self, key: &str) -> Option<String> {
        let content = std::fs::read_to_string(self.key_path(key)).ok()?;
        let trimmed = content.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    async fn set(&self, key: &str, value: &str) {
        let path = self.key_path(key);
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = std::fs::write(path, value);
    }

    async fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.key_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("jobboard_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileStore::new(dir.clone());
        store.set("token", "secret-token").await;

        // Re-open from same directory
        let store2 = FileStore::new(dir.clone());
        assert_eq!(store2.get("token").await.as_deref(), Some("secret-token"));

        store2.remove("token").await;
        assert!(store.get("token").await.is_none());

        // Removing a missing key is a no-op
        store.remove("token").await;

        let _ = std::fs::remove_dir_all(&dir);
    }
}
