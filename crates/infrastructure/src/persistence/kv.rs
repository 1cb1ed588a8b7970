//! Plain-string key-value storage on the filesystem.
//!
//! The console persists exactly two values, both plain strings under
//! fixed keys: the bearer credential and the theme preference. Each key
//! is one file inside the state directory; a missing file reads as an
//! absent key. No schema versioning.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use gantry_application::ports::StorageError;

/// One-file-per-key string storage rooted at a state directory.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    /// Creates a store rooted at the given directory. The directory is
    /// created lazily on first write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the state directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    /// Reads a key, returning `None` when it was never written.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] for any failure other than the file
    /// being absent.
    pub async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match tokio::fs::read_to_string(self.key_path(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::Io(err)),
        }
    }

    /// Writes a key, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the directory or file cannot be
    /// written.
    pub async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        tokio::fs::create_dir_all(&self.root).await?;
        tokio::fs::write(self.key_path(key), value).await?;
        Ok(())
    }

    /// Removes a key; removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] for any failure other than the file
    /// being absent.
    pub async fn remove(&self, key: &str) -> Result<(), StorageError> {
        match tokio::fs::remove_file(self.key_path(key)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::Io(err)),
        }
    }
}
