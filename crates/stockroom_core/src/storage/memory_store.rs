//! In-process key-value store.
//!
//! Used by tests and by callers that want an ephemeral workspace. Slots are
//! kept as raw text so corrupt-slot behavior can be exercised the same way
//! as with the durable backend.

use super::{KeyValueStore, StorageKey, StoreResult};
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Volatile store backed by an ordered map.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    slots: RefCell<BTreeMap<StorageKey, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of non-empty slots.
    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get_raw(&self, key: StorageKey) -> StoreResult<Option<String>> {
        Ok(self.slots.borrow().get(&key).cloned())
    }

    fn set_raw(&self, key: StorageKey, value: &str) -> StoreResult<()> {
        self.slots.borrow_mut().insert(key, value.to_string());
        Ok(())
    }

    fn remove(&self, key: StorageKey) -> StoreResult<()> {
        self.slots.borrow_mut().remove(&key);
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        self.slots.borrow_mut().clear();
        Ok(())
    }
}
