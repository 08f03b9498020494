//! Key-value preference persistence.
//!
//! Preferences live in a small JSON object in the platform config directory:
//! - Linux: ~/.config/ehr-client/preferences.json
//! - macOS: ~/Library/Application Support/ehr-client/preferences.json
//! - Windows: %APPDATA%/ehr-client/preferences.json

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use async_trait::async_trait;
use ehr_application::{PreferenceError, PreferenceStore};
use parking_lot::Mutex;
use tokio::fs;

use crate::serialization::{from_json_bytes, to_json_stable_bytes};

type Preferences = BTreeMap<String, String>;

/// File-backed preference store.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Creates a store backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the default preferences path, if a config directory exists.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ehr-client").join("preferences.json"))
    }

    async fn read_all(&self) -> Result<Preferences, PreferenceError> {
        if !fs::try_exists(&self.path).await? {
            return Ok(Preferences::new());
        }
        let content = fs::read(&self.path).await?;
        from_json_bytes(&content).map_err(|e| PreferenceError::Serialization(e.to_string()))
    }

    /// Starts over from an empty map when the file holds invalid JSON.
    /// Any other read failure is returned so no stored key is lost.
    fn discard_corrupt(&self, error: PreferenceError) -> Result<Preferences, PreferenceError> {
        match error {
            PreferenceError::Serialization(_) => {
                tracing::warn!(
                    error = %error,
                    path = %self.path.display(),
                    "Replacing unreadable preferences file"
                );
                Ok(Preferences::new())
            }
            other => Err(other),
        }
    }
}

#[async_trait]
impl PreferenceStore for FilePreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.read_all().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut preferences = self.read_all().await.or_else(|e| self.discard_corrupt(e))?;
        preferences.insert(key.to_string(), value.to_string());

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).await?;
        }
        let content = to_json_stable_bytes(&preferences)
            .map_err(|e| PreferenceError::Serialization(e.to_string()))?;
        fs::write(&self.path, content).await?;

        tracing::debug!(key, value, "Preference saved");
        Ok(())
    }
}

/// Preference store that lives only as long as the process.
///
/// Used when no config directory is available.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
