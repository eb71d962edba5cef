//! Whole-collection load/save and the shared rule checks.

use super::{EntityKind, RepoError, RepoResult};
use crate::model::company::Company;
use crate::model::department::Department;
use crate::model::inventory::InventoryRecord;
use crate::model::item::Item;
use crate::model::unit::Unit;
use crate::model::EntityId;
use crate::storage::{read_json, write_json, KeyValueStore, StorageKey};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Identified record stored in a collection slot.
pub trait Record {
    const KIND: EntityKind;
    const KEY: StorageKey;

    fn id(&self) -> &str;
}

impl Record for Company {
    const KIND: EntityKind = EntityKind::Company;
    const KEY: StorageKey = StorageKey::Companies;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Department {
    const KIND: EntityKind = EntityKind::Department;
    const KEY: StorageKey = StorageKey::Departments;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Unit {
    const KIND: EntityKind = EntityKind::Unit;
    const KEY: StorageKey = StorageKey::Units;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Item {
    const KIND: EntityKind = EntityKind::Item;
    const KEY: StorageKey = StorageKey::Items;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for InventoryRecord {
    const KIND: EntityKind = EntityKind::Inventory;
    const KEY: StorageKey = StorageKey::Inventory;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Reads the full collection; an empty or corrupt slot yields an empty list.
pub(crate) fn load<T, S>(store: &S) -> RepoResult<Vec<T>>
where
    T: Record + DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    Ok(read_json::<Vec<T>, S>(store, T::KEY)?.unwrap_or_default())
}

/// Writes the full collection back to its slot.
pub(crate) fn save<T, S>(store: &S, records: &[T]) -> RepoResult<()>
where
    T: Record + Serialize,
    S: KeyValueStore + ?Sized,
{
    write_json(store, T::KEY, records)?;
    debug!(
        "event=collection_write module=repo status=ok key={} count={}",
        T::KEY,
        records.len()
    );
    Ok(())
}

pub(crate) fn find_by_id<'a, T: Record>(records: &'a [T], id: &str) -> Option<&'a T> {
    records.iter().find(|record| record.id() == id)
}

/// Returns the position of `id`, or `NotFound`.
pub(crate) fn position_of<T: Record>(records: &[T], id: &str) -> RepoResult<usize> {
    records
        .iter()
        .position(|record| record.id() == id)
        .ok_or_else(|| RepoError::NotFound {
            entity: T::KIND,
            id: id.to_string(),
        })
}

/// Fails with `DuplicateName` when any record other than `except_id`
/// matches `collides`.
pub(crate) fn ensure_unique<T, F>(
    records: &[T],
    except_id: Option<&str>,
    field: &'static str,
    collides: F,
) -> RepoResult<()>
where
    T: Record,
    F: Fn(&T) -> bool,
{
    let duplicate = records
        .iter()
        .filter(|record| Some(record.id()) != except_id)
        .any(collides);
    if duplicate {
        debug!(
            "event=unique_violation module=repo status=rejected entity={} field={}",
            T::KIND,
            field
        );
        return Err(RepoError::DuplicateName {
            entity: T::KIND,
            field,
        });
    }
    Ok(())
}

/// Removes `id` from the collection. Returns whether anything was removed.
pub(crate) fn remove_by_id<T: Record>(records: &mut Vec<T>, id: &str) -> bool {
    let before = records.len();
    records.retain(|record| record.id() != id);
    records.len() != before
}

/// Reads an active-selection pointer. `null` and empty ids read as absent.
pub(crate) fn read_pointer<S>(store: &S, key: StorageKey) -> RepoResult<Option<EntityId>>
where
    S: KeyValueStore + ?Sized,
{
    let pointer = read_json::<Option<EntityId>, S>(store, key)?.flatten();
    Ok(pointer.filter(|id| !id.is_empty()))
}

/// Overwrites an active-selection pointer; `None` empties the slot.
pub(crate) fn write_pointer<S>(store: &S, key: StorageKey, id: Option<&str>) -> RepoResult<()>
where
    S: KeyValueStore + ?Sized,
{
    match id {
        Some(id) => write_json(store, key, id)?,
        None => store.remove(key)?,
    }
    debug!(
        "event=pointer_write module=repo status=ok key={} cleared={}",
        key,
        id.is_none()
    );
    Ok(())
}
