//! Key-value store port and typed JSON slot helpers.
//!
//! # Responsibility
//! - Define the closed set of named slots the core persists.
//! - Abstract the durable backend behind `KeyValueStore` so repositories
//!   never touch a global store directly.
//! - Serialize slot values as JSON text on write and parse them on read.
//!
//! # Invariants
//! - Every slot holds one JSON document as text.
//! - A slot whose text does not parse as the requested shape reads as
//!   absent; the condition is logged (`event=storage_read_corrupt`) and the
//!   caller sees an empty value. The next write overwrites the slot.

use crate::db::DbError;
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

mod memory_store;
mod sqlite_store;

pub use memory_store::MemoryKeyValueStore;
pub use sqlite_store::SqliteKeyValueStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Named slot in the key-value store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StorageKey {
    Companies,
    Departments,
    Units,
    Items,
    Inventory,
    ActiveCompany,
    ActiveDepartment,
    Language,
}

impl StorageKey {
    /// All known slots, in persisted-layout order.
    pub const ALL: [StorageKey; 8] = [
        StorageKey::Companies,
        StorageKey::Departments,
        StorageKey::Units,
        StorageKey::Items,
        StorageKey::Inventory,
        StorageKey::ActiveCompany,
        StorageKey::ActiveDepartment,
        StorageKey::Language,
    ];

    /// Slot name as written to the backend and into archives.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Companies => "companies",
            Self::Departments => "departments",
            Self::Units => "units",
            Self::Items => "items",
            Self::Inventory => "inventory",
            Self::ActiveCompany => "activeCompany",
            Self::ActiveDepartment => "activeDepartment",
            Self::Language => "language",
        }
    }
}

impl Display for StorageKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a slot name is outside the known set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStorageKey(pub String);

impl Display for UnknownStorageKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown storage key `{}`", self.0)
    }
}

impl Error for UnknownStorageKey {}

impl FromStr for StorageKey {
    type Err = UnknownStorageKey;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        StorageKey::ALL
            .into_iter()
            .find(|key| key.as_str() == value)
            .ok_or_else(|| UnknownStorageKey(value.to_string()))
    }
}

/// Backend failure while reading or writing a slot.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize slot value: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Persistent key-value storage with one text value per named slot.
///
/// Implementations are single-writer: callers read a whole slot, change it
/// in memory and write it back without compare-and-swap.
pub trait KeyValueStore {
    /// Returns the raw stored text, or `None` when the slot is empty.
    fn get_raw(&self, key: StorageKey) -> StoreResult<Option<String>>;
    /// Overwrites the slot with `value`.
    fn set_raw(&self, key: StorageKey, value: &str) -> StoreResult<()>;
    /// Empties the slot. Removing an empty slot succeeds.
    fn remove(&self, key: StorageKey) -> StoreResult<()>;
    /// Empties every slot.
    fn clear(&self) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_raw(&self, key: StorageKey) -> StoreResult<Option<String>> {
        (**self).get_raw(key)
    }

    fn set_raw(&self, key: StorageKey, value: &str) -> StoreResult<()> {
        (**self).set_raw(key, value)
    }

    fn remove(&self, key: StorageKey) -> StoreResult<()> {
        (**self).remove(key)
    }

    fn clear(&self) -> StoreResult<()> {
        (**self).clear()
    }
}

/// Reads a slot and parses it as `T`.
///
/// Malformed text is reported as `Ok(None)` after a `warn` event.
pub fn read_json<T, S>(store: &S, key: StorageKey) -> StoreResult<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get_raw(key)? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            warn!(
                "event=storage_read_corrupt module=storage status=error key={} bytes={} error={}",
                key,
                raw.len(),
                err
            );
            Ok(None)
        }
    }
}

/// Serializes `value` as JSON and writes it to the slot.
pub fn write_json<T, S>(store: &S, key: StorageKey, value: &T) -> StoreResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set_raw(key, &raw)
}
