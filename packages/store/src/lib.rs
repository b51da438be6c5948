pub mod config;
pub mod jobs;
pub mod models;
pub mod tokens;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use config::AppConfig;
pub use jobs::{distinct_companies, distinct_tags, fixtures, JobFilter};
pub use models::Job;
pub use tokens::{CredentialScope, TokenKeys, TokenStore};
