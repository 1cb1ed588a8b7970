//! Credential storage port

use async_trait::async_trait;
use gantry_domain::Credential;
use thiserror::Error;

/// Errors that can occur reading or writing durable storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other storage failure.
    #[error("storage error: {0}")]
    Other(String),
}

/// Port for the single persisted bearer credential.
///
/// The store is the credential's exclusive owner: it is written on login
/// and initial setup, and cleared on logout or authentication failure.
/// No other component persists it.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Returns the stored credential, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing storage cannot be read.
    async fn get(&self) -> Result<Option<Credential>, StorageError>;

    /// Stores the credential, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing storage cannot be written.
    async fn set(&self, credential: &Credential) -> Result<(), StorageError>;

    /// Removes the stored credential, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing storage cannot be written.
    async fn clear(&self) -> Result<(), StorageError>;
}
