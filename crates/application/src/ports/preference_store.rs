//! Preference store port
//!
//! A small persistent key-value store scoped to this client. It currently
//! holds a single entry, the theme preference.

use async_trait::async_trait;

use crate::error::PreferenceError;

/// Key-value store surviving across sessions.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Reads a value.
    ///
    /// Returns `Ok(None)` if the key has never been written.
    ///
    /// # Errors
    /// Returns an error if the backing store exists but cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// Writes a value, replacing any previous one.
    ///
    /// # Errors
    /// Returns an error if the value cannot be persisted.
    async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}
