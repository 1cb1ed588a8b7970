//! Theme preference storage.

use std::path::PathBuf;

use gantry_application::ports::StorageError;
use gantry_domain::ThemeMode;

use super::kv::FileKeyValueStore;

/// Storage key for the theme preference.
pub const THEME_KEY: &str = "theme";

/// Persists the theme preference as a plain string under its own key.
#[derive(Debug, Clone)]
pub struct ThemeRepository {
    store: FileKeyValueStore,
}

impl ThemeRepository {
    /// Creates a repository rooted at the given state directory.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            store: FileKeyValueStore::new(root),
        }
    }

    /// Loads the preference; absent or unrecognized values fall back to
    /// the default theme.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backing file cannot be read.
    pub async fn load(&self) -> Result<ThemeMode, StorageError> {
        Ok(self
            .store
            .get(THEME_KEY)
            .await?
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default())
    }

    /// Saves the preference.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backing file cannot be written.
    pub async fn save(&self, theme: ThemeMode) -> Result<(), StorageError> {
        self.store.set(THEME_KEY, theme.as_str()).await
    }
}
