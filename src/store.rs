//! Session-scoped key/value storage seam.
//!
//! In the browser this is `window.sessionStorage` (see `web::SessionStore`).
//! Natively and in tests it is [`MemoryStore`].

use std::collections::HashMap;

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

/// Failure reported by a [`PreferenceStore`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The storage area could not be obtained (disabled by policy, no window).
    #[error("session storage unavailable")]
    Unavailable,
    #[error("session storage read failed: {0}")]
    Read(String),
    /// Quota exceeded or the write was denied.
    #[error("session storage write failed: {0}")]
    Write(String),
}

/// String key/value store scoped to the browser session.
pub trait PreferenceStore {
    /// Read the value under `key`. `Ok(None)` means the key is absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the storage rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory [`PreferenceStore`].
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with a single entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_owned(), value.to_owned());
        store
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry, as the browser does when the session ends.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
