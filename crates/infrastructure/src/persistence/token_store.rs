//! Durable credential storage.

use std::path::PathBuf;

use async_trait::async_trait;
use gantry_application::ports::{StorageError, TokenStore};
use gantry_domain::Credential;

use super::kv::FileKeyValueStore;

/// Storage key for the bearer credential.
pub const TOKEN_KEY: &str = "admin_token";

/// Token store persisted to the state directory, surviving restarts the
/// way the browser console's credential survives page reloads.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    store: FileKeyValueStore,
}

impl FileTokenStore {
    /// Creates a token store rooted at the given state directory.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            store: FileKeyValueStore::new(root),
        }
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn get(&self) -> Result<Option<Credential>, StorageError> {
        Ok(self.store.get(TOKEN_KEY).await?.map(Credential::new))
    }

    async fn set(&self, credential: &Credential) -> Result<(), StorageError> {
        self.store.set(TOKEN_KEY, credential.as_str()).await
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(TOKEN_KEY).await
    }
}
