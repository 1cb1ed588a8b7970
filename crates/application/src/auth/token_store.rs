//! In-memory credential storage.
//!
//! This store backs tests and ephemeral sessions; durable deployments use
//! the file-backed store from the infrastructure crate. Either way the
//! store is the credential's only owner.

use std::sync::Arc;

use async_trait::async_trait;
use gantry_domain::Credential;
use tokio::sync::RwLock;

use crate::ports::{StorageError, TokenStore};

/// Thread-safe in-memory credential store.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    credential: Arc<RwLock<Option<Credential>>>,
}

impl MemoryTokenStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a credential.
    #[must_use]
    pub fn with_credential(credential: Credential) -> Self {
        Self {
            credential: Arc::new(RwLock::new(Some(credential))),
        }
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn get(&self) -> Result<Option<Credential>, StorageError> {
        Ok(self.credential.read().await.clone())
    }

    async fn set(&self, credential: &Credential) -> Result<(), StorageError> {
        *self.credential.write().await = Some(credential.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        *self.credential.write().await = None;
        Ok(())
    }
}
