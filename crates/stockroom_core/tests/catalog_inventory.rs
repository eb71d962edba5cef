use chrono::NaiveDate;
use stockroom_core::{
    CreateInventoryRequest, CreateItemRequest, CreateUnitRequest, EntityKind,
    InventoryRepository, ItemCategory, ItemRepository, MemoryKeyValueStore, RepoError,
    StoreInventoryRepository, StoreItemRepository, StoreUnitRepository, UnitRepository,
    UpdateInventoryRequest, UpdateItemRequest, UpdateUnitRequest, ValidationError,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn unit_names_are_globally_unique() {
    let store = MemoryKeyValueStore::new();
    let repo = StoreUnitRepository::new(&store);

    let box_unit = repo.create_unit(&CreateUnitRequest::new("Box")).unwrap();
    let err = repo.create_unit(&CreateUnitRequest::new("Box")).unwrap_err();
    assert!(matches!(
        err,
        RepoError::DuplicateName {
            entity: EntityKind::Unit,
            field: "name"
        }
    ));

    let pack = repo.create_unit(&CreateUnitRequest::new("Pack")).unwrap();
    let err = repo
        .update_unit(&UpdateUnitRequest {
            id: pack.id.clone(),
            name: "Box".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, RepoError::DuplicateName { .. }));

    repo.delete_unit(&box_unit.id).unwrap();
    let renamed = repo
        .update_unit(&UpdateUnitRequest {
            id: pack.id.clone(),
            name: "Box".to_string(),
        })
        .unwrap();
    assert_eq!(repo.list_units().unwrap(), vec![renamed]);
}

#[test]
fn item_description_collision_on_update_fails_but_self_update_succeeds() {
    let store = MemoryKeyValueStore::new();
    let repo = StoreItemRepository::new(&store);

    let stapler = repo
        .create_item(&CreateItemRequest::new(ItemCategory::Office, "Stapler", "u1"))
        .unwrap();
    repo.create_item(&CreateItemRequest::new(ItemCategory::Cleaning, "Mop", "u1"))
        .unwrap();

    let err = repo
        .update_item(&UpdateItemRequest {
            id: stapler.id.clone(),
            category: ItemCategory::Office,
            description: "Mop".to_string(),
            unit: "u1".to_string(),
        })
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::DuplicateName {
            entity: EntityKind::Item,
            field: "description"
        }
    ));

    let updated = repo
        .update_item(&UpdateItemRequest {
            id: stapler.id.clone(),
            category: ItemCategory::Stationery,
            description: "Stapler".to_string(),
            unit: "u2".to_string(),
        })
        .unwrap();
    assert_eq!(updated.category, ItemCategory::Stationery);
    assert_eq!(repo.get_item(&stapler.id).unwrap(), Some(updated));
}

#[test]
fn item_unit_reference_is_not_validated() {
    let store = MemoryKeyValueStore::new();
    let repo = StoreItemRepository::new(&store);

    let item = repo
        .create_item(&CreateItemRequest::new(
            ItemCategory::Cafeteria,
            "Coffee beans",
            "unit-that-does-not-exist",
        ))
        .unwrap();
    assert_eq!(item.unit, "unit-that-does-not-exist");
}

#[test]
fn inventory_is_listed_per_department_in_stored_order() {
    let store = MemoryKeyValueStore::new();
    let repo = StoreInventoryRepository::new(&store);

    let first = repo
        .create_inventory(&CreateInventoryRequest {
            item_id: "i1".to_string(),
            department_id: "d1".to_string(),
            quantity: 4.0,
            date: date(2026, 1, 5),
        })
        .unwrap();
    repo.create_inventory(&CreateInventoryRequest {
        item_id: "i1".to_string(),
        department_id: "d2".to_string(),
        quantity: 1.0,
        date: date(2026, 1, 6),
    })
    .unwrap();
    let second = repo
        .create_inventory(&CreateInventoryRequest {
            item_id: "i2".to_string(),
            department_id: "d1".to_string(),
            quantity: 0.0,
            date: date(2026, 1, 7),
        })
        .unwrap();

    assert_eq!(
        repo.list_inventory_by_department("d1").unwrap(),
        vec![first, second]
    );
    assert_eq!(repo.list_inventory().unwrap().len(), 3);
}

#[test]
fn inventory_rejects_negative_quantity() {
    let store = MemoryKeyValueStore::new();
    let repo = StoreInventoryRepository::new(&store);

    let err = repo
        .create_inventory(&CreateInventoryRequest {
            item_id: "i1".to_string(),
            department_id: "d1".to_string(),
            quantity: -1.0,
            date: date(2026, 2, 1),
        })
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::InvalidQuantity(_))
    ));
    assert!(repo.list_inventory().unwrap().is_empty());
}

#[test]
fn inventory_update_replaces_fields_and_missing_id_is_not_found() {
    let store = MemoryKeyValueStore::new();
    let repo = StoreInventoryRepository::new(&store);
    let record = repo
        .create_inventory(&CreateInventoryRequest {
            item_id: "i1".to_string(),
            department_id: "d1".to_string(),
            quantity: 2.0,
            date: date(2026, 3, 1),
        })
        .unwrap();

    let updated = repo
        .update_inventory(&UpdateInventoryRequest {
            id: record.id.clone(),
            item_id: "i1".to_string(),
            department_id: "d1".to_string(),
            quantity: 7.5,
            date: date(2026, 3, 2),
        })
        .unwrap();
    assert_eq!(updated.quantity, 7.5);
    assert_eq!(updated.date, date(2026, 3, 2));

    let err = repo
        .update_inventory(&UpdateInventoryRequest {
            id: "missing".to_string(),
            item_id: "i1".to_string(),
            department_id: "d1".to_string(),
            quantity: 1.0,
            date: date(2026, 3, 3),
        })
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::NotFound {
            entity: EntityKind::Inventory,
            ..
        }
    ));
}

#[test]
fn inventory_dates_are_stored_as_calendar_dates() {
    let store = MemoryKeyValueStore::new();
    let repo = StoreInventoryRepository::new(&store);
    repo.create_inventory(&CreateInventoryRequest {
        item_id: "i1".to_string(),
        department_id: "d1".to_string(),
        quantity: 3.0,
        date: date(2026, 10, 19),
    })
    .unwrap();

    let stored: serde_json::Value = stockroom_core::storage::read_json(
        &store,
        stockroom_core::StorageKey::Inventory,
    )
    .unwrap()
    .unwrap();
    assert_eq!(stored[0]["date"], "2026-10-19");
    assert_eq!(stored[0]["departmentId"], "d1");
}
