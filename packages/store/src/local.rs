//! # `localStorage` token store: browser-side persistence
//!
//! [`LocalStore`] is the [`TokenStore`] used on the **web platform**. Tokens are
//! stored as plain strings in `window.localStorage`, one entry per key, so they
//! survive reloads and are shared between tabs of the same origin.
//!
//! ## Error handling
//!
//! Every method silently swallows errors. Private browsing modes and storage
//! quotas make `localStorage` unavailable in ways the UI cannot fix; a missing
//! store degrades to "no token", which the session layer already handles as
//! signed out.

use crate::tokens::TokenStore;

/// `window.localStorage`-backed TokenStore.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl TokenStore for LocalStore {
    async fn get(&self, key: &str) -> Option<String> {
        let value = Self::storage()?.get_item(key).ok()??;
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }

    async fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    async fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
