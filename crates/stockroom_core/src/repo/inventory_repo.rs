//! Inventory movement repository.
//!
//! Records carry no uniqueness rule; `item_id` and `department_id` are
//! stored without existence checks.

use super::collection::{find_by_id, load, position_of, remove_by_id, save};
use super::RepoResult;
use crate::model::inventory::{CreateInventoryRequest, InventoryRecord, UpdateInventoryRequest};
use crate::model::new_entity_id;
use crate::storage::KeyValueStore;
use log::info;

/// Repository interface for inventory records.
pub trait InventoryRepository {
    fn list_inventory(&self) -> RepoResult<Vec<InventoryRecord>>;
    /// Records of one department, in stored order.
    fn list_inventory_by_department(&self, department_id: &str)
        -> RepoResult<Vec<InventoryRecord>>;
    fn get_inventory(&self, id: &str) -> RepoResult<Option<InventoryRecord>>;
    fn create_inventory(&self, request: &CreateInventoryRequest) -> RepoResult<InventoryRecord>;
    fn update_inventory(&self, request: &UpdateInventoryRequest) -> RepoResult<InventoryRecord>;
    fn delete_inventory(&self, id: &str) -> RepoResult<()>;
}

pub fn insert_inventory(
    records: &mut Vec<InventoryRecord>,
    request: &CreateInventoryRequest,
) -> RepoResult<InventoryRecord> {
    request.validate()?;
    let record = InventoryRecord {
        id: new_entity_id(),
        item_id: request.item_id.clone(),
        department_id: request.department_id.clone(),
        quantity: request.quantity,
        date: request.date,
    };
    records.push(record.clone());
    Ok(record)
}

pub fn apply_inventory_update(
    records: &mut [InventoryRecord],
    request: &UpdateInventoryRequest,
) -> RepoResult<InventoryRecord> {
    request.validate()?;
    let index = position_of(records, &request.id)?;

    let record = &mut records[index];
    record.item_id = request.item_id.clone();
    record.department_id = request.department_id.clone();
    record.quantity = request.quantity;
    record.date = request.date;
    Ok(record.clone())
}

/// Inventory repository over any key-value store.
pub struct StoreInventoryRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> StoreInventoryRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: KeyValueStore> InventoryRepository for StoreInventoryRepository<S> {
    fn list_inventory(&self) -> RepoResult<Vec<InventoryRecord>> {
        load(&self.store)
    }

    fn list_inventory_by_department(
        &self,
        department_id: &str,
    ) -> RepoResult<Vec<InventoryRecord>> {
        let records: Vec<InventoryRecord> = load(&self.store)?;
        Ok(records
            .into_iter()
            .filter(|record| record.department_id == department_id)
            .collect())
    }

    fn get_inventory(&self, id: &str) -> RepoResult<Option<InventoryRecord>> {
        let records: Vec<InventoryRecord> = load(&self.store)?;
        Ok(find_by_id(&records, id).cloned())
    }

    fn create_inventory(&self, request: &CreateInventoryRequest) -> RepoResult<InventoryRecord> {
        let mut records: Vec<InventoryRecord> = load(&self.store)?;
        let record = insert_inventory(&mut records, request)?;
        save(&self.store, &records)?;
        info!(
            "event=inventory_create module=repo status=ok inventory_id={} department_id={}",
            record.id, record.department_id
        );
        Ok(record)
    }

    fn update_inventory(&self, request: &UpdateInventoryRequest) -> RepoResult<InventoryRecord> {
        let mut records: Vec<InventoryRecord> = load(&self.store)?;
        let record = apply_inventory_update(&mut records, request)?;
        save(&self.store, &records)?;
        Ok(record)
    }

    fn delete_inventory(&self, id: &str) -> RepoResult<()> {
        let mut records: Vec<InventoryRecord> = load(&self.store)?;
        let removed = remove_by_id(&mut records, id);
        save(&self.store, &records)?;
        info!(
            "event=inventory_delete module=repo status=ok inventory_id={} removed={}",
            id, removed
        );
        Ok(())
    }
}
