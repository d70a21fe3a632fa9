//! Token persistence
//!
//! The client never talks to a concrete storage backend. It reads and writes
//! the two credentials through [`TokenStore`], so the browser build can plug in
//! `localStorage` while native code and tests use [`MemoryTokenStore`].

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use super::error::ClientError;

/// Key/value storage for credentials
///
/// Writes are atomic per call; there is no cross-call locking.
pub trait TokenStore: Send + Sync {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), ClientError>;

    /// Remove the value stored under `key`. Removing a missing key is a no-op.
    fn remove(&self, key: &str);
}

/// In-process token store
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryTokenStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given entries
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: Mutex::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), ClientError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.get("token"), None);

        store.set("token", "abc").unwrap();
        assert_eq!(store.get("token").as_deref(), Some("abc"));

        store.set("token", "def").unwrap();
        assert_eq!(store.get("token").as_deref(), Some("def"));

        store.remove("token");
        assert_eq!(store.get("token"), None);
        store.remove("token");
    }

    #[test]
    fn with_entries_prepopulates() {
        let store = MemoryTokenStore::with_entries([("token", "t1"), ("refreshToken", "r1")]);
        assert_eq!(store.get("token").as_deref(), Some("t1"));
        assert_eq!(store.get("refreshToken").as_deref(), Some("r1"));
    }
}
