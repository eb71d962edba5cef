//! Catalog item repository.
//!
//! # Invariants
//! - Item descriptions are unique across all items (exact match).
//! - The `unit` reference is stored as given.

use super::collection::{ensure_unique, find_by_id, load, position_of, remove_by_id, save};
use super::RepoResult;
use crate::model::item::{CreateItemRequest, Item, UpdateItemRequest};
use crate::model::new_entity_id;
use crate::storage::KeyValueStore;
use log::info;

const DESCRIPTION_FIELD: &str = "description";

/// Repository interface for catalog items.
pub trait ItemRepository {
    fn list_items(&self) -> RepoResult<Vec<Item>>;
    fn get_item(&self, id: &str) -> RepoResult<Option<Item>>;
    fn create_item(&self, request: &CreateItemRequest) -> RepoResult<Item>;
    fn update_item(&self, request: &UpdateItemRequest) -> RepoResult<Item>;
    fn delete_item(&self, id: &str) -> RepoResult<()>;
}

pub fn insert_item(items: &mut Vec<Item>, request: &CreateItemRequest) -> RepoResult<Item> {
    request.validate()?;
    ensure_unique(items, None, DESCRIPTION_FIELD, |item| {
        item.description == request.description
    })?;

    let item = Item {
        id: new_entity_id(),
        category: request.category,
        description: request.description.clone(),
        unit: request.unit.clone(),
    };
    items.push(item.clone());
    Ok(item)
}

pub fn apply_item_update(items: &mut [Item], request: &UpdateItemRequest) -> RepoResult<Item> {
    request.validate()?;
    let index = position_of(items, &request.id)?;
    ensure_unique(items, Some(&request.id), DESCRIPTION_FIELD, |item| {
        item.description == request.description
    })?;

    let item = &mut items[index];
    item.category = request.category;
    item.description = request.description.clone();
    item.unit = request.unit.clone();
    Ok(item.clone())
}

/// Item repository over any key-value store.
pub struct StoreItemRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> StoreItemRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: KeyValueStore> ItemRepository for StoreItemRepository<S> {
    fn list_items(&self) -> RepoResult<Vec<Item>> {
        load(&self.store)
    }

    fn get_item(&self, id: &str) -> RepoResult<Option<Item>> {
        let items: Vec<Item> = load(&self.store)?;
        Ok(find_by_id(&items, id).cloned())
    }

    fn create_item(&self, request: &CreateItemRequest) -> RepoResult<Item> {
        let mut items: Vec<Item> = load(&self.store)?;
        let item = insert_item(&mut items, request)?;
        save(&self.store, &items)?;
        info!("event=item_create module=repo status=ok item_id={}", item.id);
        Ok(item)
    }

    fn update_item(&self, request: &UpdateItemRequest) -> RepoResult<Item> {
        let mut items: Vec<Item> = load(&self.store)?;
        let item = apply_item_update(&mut items, request)?;
        save(&self.store, &items)?;
        Ok(item)
    }

    fn delete_item(&self, id: &str) -> RepoResult<()> {
        let mut items: Vec<Item> = load(&self.store)?;
        let removed = remove_by_id(&mut items, id);
        save(&self.store, &items)?;
        info!(
            "event=item_delete module=repo status=ok item_id={} removed={}",
            id, removed
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_item_update, insert_item};
    use crate::model::item::{CreateItemRequest, ItemCategory, UpdateItemRequest};

    #[test]
    fn updating_to_own_description_is_not_a_collision() {
        let mut items = Vec::new();
        let item = insert_item(
            &mut items,
            &CreateItemRequest::new(ItemCategory::Office, "Stapler", "u1"),
        )
        .unwrap();

        let updated = apply_item_update(
            &mut items,
            &UpdateItemRequest {
                id: item.id.clone(),
                category: ItemCategory::Stationery,
                description: "Stapler".to_string(),
                unit: "u2".to_string(),
            },
        )
        .unwrap();
        assert_eq!(updated.category, ItemCategory::Stationery);
        assert_eq!(updated.unit, "u2");
        assert_eq!(items.len(), 1);
    }
}
