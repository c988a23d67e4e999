use std::collections::HashMap;
use std::sync::RwLock;

use thiserror::Error;

/// Error returned when the store's lock has been poisoned by a panicking
/// holder. The three operations cannot fail any other way.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store lock poisoned")]
    LockPoisoned,
}

/// In-memory key-value store.
///
/// A single readers-writer lock guards the whole map: `set` and `delete`
/// take exclusive access, `get` takes shared access. The lock is held only
/// for the map operation itself.
pub struct Store {
    entries: RwLock<HashMap<String, String>>,
}

impl Store {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Set a key to the given value, overwriting any previous value.
    ///
    /// Empty keys and empty values are both accepted; keys are opaque.
    pub fn set(&self, key: String, value: String) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::LockPoisoned)?;
        entries.insert(key, value);
        Ok(())
    }

    /// Get the value for a key. `None` means the key is absent, which is a
    /// normal outcome rather than an error.
    pub fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    /// Remove a key, returning whether it was present.
    pub fn delete(&self, key: &str) -> Result<bool, StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.remove(key).is_some())
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
