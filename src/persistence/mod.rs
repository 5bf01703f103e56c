//! Key-value persistence
//!
//! The game persists a single string-encoded integer. Stores:
//! - `MemoryStore`: in-process map (native builds, tests)
//! - `LocalStore`: browser LocalStorage (wasm32 only)

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Why a write did not reach storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No backing storage (private browsing, storage disabled)
    Unavailable,
    /// Backend refused the write (quota, security)
    Rejected(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable => write!(f, "storage unavailable"),
            StoreError::Rejected(reason) => write!(f, "storage rejected write: {}", reason),
        }
    }
}

impl std::error::Error for StoreError {}

/// String key-value storage collaborator
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-memory store. Clones share the same map, so a test can keep a handle
/// and inspect what the game wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one entry
    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    /// Handle that rejects every write (simulates unavailable storage)
    pub fn read_only(&self) -> Self {
        Self {
            items: self.items.clone(),
            read_only: true,
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::Unavailable);
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Browser LocalStorage
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct LocalStore;

#[cfg(target_arch = "wasm32")]
impl LocalStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StoreError::Rejected(format!("{:?}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_shared_handles() {
        let store = MemoryStore::new();
        let mut writer = store.clone();
        writer.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn test_read_only_rejects() {
        let store = MemoryStore::with_item("k", "1");
        let mut ro = store.read_only();
        assert_eq!(ro.set("k", "2"), Err(StoreError::Unavailable));
        assert_eq!(ro.get("k").as_deref(), Some("1"));
    }
}
