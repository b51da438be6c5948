//! Platform API client constructor.
//!
//! Returns an [`api::ApiClient`] backed by the appropriate [`store::TokenStore`]:
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStore`]
//! - **Native**: token files under `<data_dir>/jobboard/` via [`store::FileStore`]
//!
//! The backend location comes from the [`AppConfig`] installed with
//! [`configure`] at startup; relative base URLs resolve against the page origin.

use std::sync::OnceLock;

use api::{ApiClient, CredentialScope, HttpTransport};
use store::AppConfig;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Install the app configuration. Only the first call has an effect.
pub fn configure(config: AppConfig) {
    if CONFIG.set(config).is_err() {
        tracing::warn!("configuration already installed; ignoring");
    }
}

pub fn app_config() -> AppConfig {
    CONFIG.get().cloned().unwrap_or_default()
}

/// Absolute URL every endpoint path is appended to.
pub fn api_base_url() -> String {
    app_config().absolute_base_url(&origin())
}

#[cfg(target_arch = "wasm32")]
fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn origin() -> String {
    "http://localhost:8000".to_string()
}

/// Create a client for one credential scope.
pub fn make_client(scope: CredentialScope) -> ApiClient<HttpTransport, impl store::TokenStore> {
    let config = app_config();
    ApiClient::new(
        HttpTransport::new(config.absolute_base_url(&origin())),
        token_store(),
        config.session.token_keys(),
        scope,
    )
}

fn token_store() -> impl store::TokenStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("jobboard");
        store::FileStore::new(base)
    }
}
