//! Department repository and active-department pointer.
//!
//! # Invariants
//! - Department names are unique within one `company_id`; other companies
//!   may reuse a name.
//! - `company_id` is never checked against the company collection.
//! - Deleting a department leaves the active-department pointer as is; a
//!   stale pointer reads as "no active department".

use super::collection::{
    ensure_unique, find_by_id, load, position_of, read_pointer, remove_by_id, save, write_pointer,
};
use super::RepoResult;
use crate::model::department::{CreateDepartmentRequest, Department, UpdateDepartmentRequest};
use crate::model::new_entity_id;
use crate::storage::{KeyValueStore, StorageKey};
use log::info;

const NAME_FIELD: &str = "name";

/// Repository interface for departments.
pub trait DepartmentRepository {
    fn list_departments(&self) -> RepoResult<Vec<Department>>;
    /// Departments of one company, in stored order.
    fn list_departments_by_company(&self, company_id: &str) -> RepoResult<Vec<Department>>;
    fn get_department(&self, id: &str) -> RepoResult<Option<Department>>;
    fn create_department(&self, request: &CreateDepartmentRequest) -> RepoResult<Department>;
    fn update_department(&self, request: &UpdateDepartmentRequest) -> RepoResult<Department>;
    fn delete_department(&self, id: &str) -> RepoResult<()>;
    fn get_active_department(&self) -> RepoResult<Option<Department>>;
    fn set_active_department(&self, id: Option<&str>) -> RepoResult<()>;
}

/// Keeps the departments of `company_id`, preserving relative order.
pub fn filter_by_company(departments: Vec<Department>, company_id: &str) -> Vec<Department> {
    departments
        .into_iter()
        .filter(|department| department.company_id == company_id)
        .collect()
}

/// Appends a new department after checking per-company name uniqueness.
pub fn insert_department(
    departments: &mut Vec<Department>,
    request: &CreateDepartmentRequest,
) -> RepoResult<Department> {
    request.validate()?;
    ensure_unique(departments, None, NAME_FIELD, |department| {
        department.company_id == request.company_id && department.name == request.name
    })?;

    let department = Department {
        id: new_entity_id(),
        company_id: request.company_id.clone(),
        name: request.name.clone(),
    };
    departments.push(department.clone());
    Ok(department)
}

/// Renames a department in place, keeping it under its current company.
pub fn apply_department_update(
    departments: &mut [Department],
    request: &UpdateDepartmentRequest,
) -> RepoResult<Department> {
    request.validate()?;
    let index = position_of(departments, &request.id)?;
    let company_id = departments[index].company_id.clone();
    ensure_unique(departments, Some(&request.id), NAME_FIELD, |department| {
        department.company_id == company_id && department.name == request.name
    })?;

    let department = &mut departments[index];
    department.name = request.name.clone();
    Ok(department.clone())
}

/// Department repository over any key-value store.
pub struct StoreDepartmentRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> StoreDepartmentRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: KeyValueStore> DepartmentRepository for StoreDepartmentRepository<S> {
    fn list_departments(&self) -> RepoResult<Vec<Department>> {
        load(&self.store)
    }

    fn list_departments_by_company(&self, company_id: &str) -> RepoResult<Vec<Department>> {
        Ok(filter_by_company(load(&self.store)?, company_id))
    }

    fn get_department(&self, id: &str) -> RepoResult<Option<Department>> {
        let departments: Vec<Department> = load(&self.store)?;
        Ok(find_by_id(&departments, id).cloned())
    }

    fn create_department(&self, request: &CreateDepartmentRequest) -> RepoResult<Department> {
        let mut departments: Vec<Department> = load(&self.store)?;
        let department = insert_department(&mut departments, request)?;
        save(&self.store, &departments)?;
        info!(
            "event=department_create module=repo status=ok department_id={} company_id={}",
            department.id, department.company_id
        );
        Ok(department)
    }

    fn update_department(&self, request: &UpdateDepartmentRequest) -> RepoResult<Department> {
        let mut departments: Vec<Department> = load(&self.store)?;
        let department = apply_department_update(&mut departments, request)?;
        save(&self.store, &departments)?;
        Ok(department)
    }

    fn delete_department(&self, id: &str) -> RepoResult<()> {
        let mut departments: Vec<Department> = load(&self.store)?;
        let removed = remove_by_id(&mut departments, id);
        save(&self.store, &departments)?;
        info!(
            "event=department_delete module=repo status=ok department_id={} removed={}",
            id, removed
        );
        Ok(())
    }

    fn get_active_department(&self) -> RepoResult<Option<Department>> {
        let Some(active_id) = read_pointer(&self.store, StorageKey::ActiveDepartment)? else {
            return Ok(None);
        };
        self.get_department(&active_id)
    }

    fn set_active_department(&self, id: Option<&str>) -> RepoResult<()> {
        write_pointer(&self.store, StorageKey::ActiveDepartment, id)
    }
}
