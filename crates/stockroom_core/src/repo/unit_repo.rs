//! Unit-of-measure repository.
//!
//! Unit names are unique across all units. Deleting a unit does not touch
//! items that still reference it.

use super::collection::{ensure_unique, find_by_id, load, position_of, remove_by_id, save};
use super::RepoResult;
use crate::model::new_entity_id;
use crate::model::unit::{CreateUnitRequest, Unit, UpdateUnitRequest};
use crate::storage::KeyValueStore;
use log::info;

const NAME_FIELD: &str = "name";

/// Repository interface for units.
pub trait UnitRepository {
    fn list_units(&self) -> RepoResult<Vec<Unit>>;
    fn get_unit(&self, id: &str) -> RepoResult<Option<Unit>>;
    fn create_unit(&self, request: &CreateUnitRequest) -> RepoResult<Unit>;
    fn update_unit(&self, request: &UpdateUnitRequest) -> RepoResult<Unit>;
    fn delete_unit(&self, id: &str) -> RepoResult<()>;
}

pub fn insert_unit(units: &mut Vec<Unit>, request: &CreateUnitRequest) -> RepoResult<Unit> {
    request.validate()?;
    ensure_unique(units, None, NAME_FIELD, |unit| unit.name == request.name)?;

    let unit = Unit {
        id: new_entity_id(),
        name: request.name.clone(),
    };
    units.push(unit.clone());
    Ok(unit)
}

pub fn apply_unit_update(units: &mut [Unit], request: &UpdateUnitRequest) -> RepoResult<Unit> {
    request.validate()?;
    let index = position_of(units, &request.id)?;
    ensure_unique(units, Some(&request.id), NAME_FIELD, |unit| {
        unit.name == request.name
    })?;

    let unit = &mut units[index];
    unit.name = request.name.clone();
    Ok(unit.clone())
}

/// Unit repository over any key-value store.
pub struct StoreUnitRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> StoreUnitRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: KeyValueStore> UnitRepository for StoreUnitRepository<S> {
    fn list_units(&self) -> RepoResult<Vec<Unit>> {
        load(&self.store)
    }

    fn get_unit(&self, id: &str) -> RepoResult<Option<Unit>> {
        let units: Vec<Unit> = load(&self.store)?;
        Ok(find_by_id(&units, id).cloned())
    }

    fn create_unit(&self, request: &CreateUnitRequest) -> RepoResult<Unit> {
        let mut units: Vec<Unit> = load(&self.store)?;
        let unit = insert_unit(&mut units, request)?;
        save(&self.store, &units)?;
        info!("event=unit_create module=repo status=ok unit_id={}", unit.id);
        Ok(unit)
    }

    fn update_unit(&self, request: &UpdateUnitRequest) -> RepoResult<Unit> {
        let mut units: Vec<Unit> = load(&self.store)?;
        let unit = apply_unit_update(&mut units, request)?;
        save(&self.store, &units)?;
        Ok(unit)
    }

    fn delete_unit(&self, id: &str) -> RepoResult<()> {
        let mut units: Vec<Unit> = load(&self.store)?;
        let removed = remove_by_id(&mut units, id);
        save(&self.store, &units)?;
        info!(
            "event=unit_delete module=repo status=ok unit_id={} removed={}",
            id, removed
        );
        Ok(())
    }
}
