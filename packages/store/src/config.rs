//! # Application configuration: `jobboard.toml`
//!
//! Defines the TOML file the web crate embeds at build time
//! (filename: [`AppConfig::filename`] = `"jobboard.toml"`). It tells the
//! frontend where the backend lives and which `localStorage` keys hold the
//! two session tokens.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "/api"          # relative paths resolve against the page origin
//!
//! [session]
//! user_token_key = "token"
//! admin_token_key = "admin_token"
//! ```
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`AppConfig`] | Top-level config with builder helpers and TOML (de)serialisation. |
//! | [`ApiConfig`] | Backend location. |
//! | [`SessionConfig`] | Storage keys for the user and admin credential namespaces. |
//!
//! All structs derive `Default`, so a missing or empty file is equivalent to
//! the default configuration.

use serde::{Deserialize, Serialize};

use crate::tokens::TokenKeys;

/// Top-level configuration stored in `jobboard.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Backend API configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to. May be relative.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "/api".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Client-side session storage configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_user_token_key")]
    pub user_token_key: String,
    #[serde(default = "default_admin_token_key")]
    pub admin_token_key: String,
}

fn default_user_token_key() -> String {
    "token".to_string()
}

fn default_admin_token_key() -> String {
    "admin_token".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user_token_key: default_user_token_key(),
            admin_token_key: default_admin_token_key(),
        }
    }
}

impl SessionConfig {
    pub fn token_keys(&self) -> TokenKeys {
        TokenKeys {
            user: self.user_token_key.clone(),
            admin: self.admin_token_key.clone(),
        }
    }
}

impl AppConfig {
    /// Builder method to point the client at a different backend.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Whether the base URL must be joined with a page or dev-server origin.
    pub fn is_relative(&self) -> bool {
        !(self.api.base_url.starts_with("http://") || self.api.base_url.starts_with("https://"))
    }

    /// Resolve the base URL against `origin` when it is relative.
    pub fn absolute_base_url(&self, origin: &str) -> String {
        let base = self.api.base_url.trim_end_matches('/');
        if self.is_relative() {
            let origin = origin.trim_end_matches('/');
            let sep = if base.starts_with('/') { "" } else { "/" };
            format!("{origin}{sep}{base}")
        } else {
            base.to_string()
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "jobboard.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.base_url, "/api");
        assert_eq!(config.session.user_token_key, "token");
        assert_eq!(config.session.admin_token_key, "admin_token");
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = AppConfig::from_toml("[session]\nadmin_token_key = \"adm\"\n").unwrap();
        assert_eq!(config.api.base_url, "/api");
        assert_eq!(config.session.user_token_key, "token");
        assert_eq!(config.session.admin_token_key, "adm");
    }

    #[test]
    fn test_absolute_base_url() {
        let config = AppConfig::default();
        assert_eq!(
            config.absolute_base_url("https://jobs.example.com/"),
            "https://jobs.example.com/api"
        );

        let config = AppConfig::default().with_base_url("https://api.example.com/v1/");
        assert!(!config.is_relative());
        assert_eq!(
            config.absolute_base_url("http://localhost:8080"),
            "https://api.example.com/v1"
        );
    }

    #[test]
    fn test_toml_roundtrip_preserves_keys() {
        let config = AppConfig::default().with_base_url("http://localhost:8000/api");
        let text = config.to_toml().unwrap();
        assert!(text.contains("base_url"));
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }
}
