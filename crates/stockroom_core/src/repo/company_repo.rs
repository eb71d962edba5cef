//! Company repository and active-company pointer.
//!
//! # Invariants
//! - Company names are unique across all companies (exact match).
//! - Deleting a company leaves its departments and pointer untouched.
//! - A stale active-company pointer reads as "no active company" and is
//!   not cleared by the read.

use super::collection::{
    ensure_unique, find_by_id, load, position_of, read_pointer, remove_by_id, save, write_pointer,
};
use super::RepoResult;
use crate::model::company::{Company, CreateCompanyRequest, UpdateCompanyRequest};
use crate::model::new_entity_id;
use crate::storage::{KeyValueStore, StorageKey};
use log::info;

const NAME_FIELD: &str = "name";

/// Repository interface for companies.
pub trait CompanyRepository {
    fn list_companies(&self) -> RepoResult<Vec<Company>>;
    fn get_company(&self, id: &str) -> RepoResult<Option<Company>>;
    fn create_company(&self, request: &CreateCompanyRequest) -> RepoResult<Company>;
    fn update_company(&self, request: &UpdateCompanyRequest) -> RepoResult<Company>;
    fn delete_company(&self, id: &str) -> RepoResult<()>;
    /// Resolves the active-company pointer against the collection.
    fn get_active_company(&self) -> RepoResult<Option<Company>>;
    /// Overwrites the pointer without checking that `id` exists.
    fn set_active_company(&self, id: Option<&str>) -> RepoResult<()>;
}

/// Appends a new company after checking name uniqueness.
pub fn insert_company(
    companies: &mut Vec<Company>,
    request: &CreateCompanyRequest,
) -> RepoResult<Company> {
    request.validate()?;
    ensure_unique(companies, None, NAME_FIELD, |company| {
        company.name == request.name
    })?;

    let company = Company {
        id: new_entity_id(),
        name: request.name.clone(),
    };
    companies.push(company.clone());
    Ok(company)
}

/// Renames a company in place.
pub fn apply_company_update(
    companies: &mut [Company],
    request: &UpdateCompanyRequest,
) -> RepoResult<Company> {
    request.validate()?;
    let index = position_of(companies, &request.id)?;
    ensure_unique(companies, Some(&request.id), NAME_FIELD, |company| {
        company.name == request.name
    })?;

    let company = &mut companies[index];
    company.name = request.name.clone();
    Ok(company.clone())
}

/// Company repository over any key-value store.
pub struct StoreCompanyRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> StoreCompanyRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: KeyValueStore> CompanyRepository for StoreCompanyRepository<S> {
    fn list_companies(&self) -> RepoResult<Vec<Company>> {
        load(&self.store)
    }

    fn get_company(&self, id: &str) -> RepoResult<Option<Company>> {
        let companies: Vec<Company> = load(&self.store)?;
        Ok(find_by_id(&companies, id).cloned())
    }

    fn create_company(&self, request: &CreateCompanyRequest) -> RepoResult<Company> {
        let mut companies: Vec<Company> = load(&self.store)?;
        let company = insert_company(&mut companies, request)?;
        save(&self.store, &companies)?;
        info!(
            "event=company_create module=repo status=ok company_id={}",
            company.id
        );
        Ok(company)
    }

    fn update_company(&self, request: &UpdateCompanyRequest) -> RepoResult<Company> {
        let mut companies: Vec<Company> = load(&self.store)?;
        let company = apply_company_update(&mut companies, request)?;
        save(&self.store, &companies)?;
        Ok(company)
    }

    fn delete_company(&self, id: &str) -> RepoResult<()> {
        let mut companies: Vec<Company> = load(&self.store)?;
        let removed = remove_by_id(&mut companies, id);
        save(&self.store, &companies)?;
        info!(
            "event=company_delete module=repo status=ok company_id={} removed={}",
            id, removed
        );
        Ok(())
    }

    fn get_active_company(&self) -> RepoResult<Option<Company>> {
        let Some(active_id) = read_pointer(&self.store, StorageKey::ActiveCompany)? else {
            return Ok(None);
        };
        self.get_company(&active_id)
    }

    fn set_active_company(&self, id: Option<&str>) -> RepoResult<()> {
        write_pointer(&self.store, StorageKey::ActiveCompany, id)
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_company_update, insert_company};
    use crate::model::company::{CreateCompanyRequest, UpdateCompanyRequest};
    use crate::repo::{EntityKind, RepoError};

    #[test]
    fn insert_rejects_exact_duplicate_but_not_case_variant() {
        let mut companies = Vec::new();
        insert_company(&mut companies, &CreateCompanyRequest::new("Acme")).unwrap();

        let err = insert_company(&mut companies, &CreateCompanyRequest::new("Acme")).unwrap_err();
        assert!(matches!(
            err,
            RepoError::DuplicateName {
                entity: EntityKind::Company,
                field: "name"
            }
        ));

        insert_company(&mut companies, &CreateCompanyRequest::new("ACME")).unwrap();
        assert_eq!(companies.len(), 2);
    }

    #[test]
    fn update_missing_id_is_not_found() {
        let mut companies = Vec::new();
        let err = apply_company_update(
            &mut companies,
            &UpdateCompanyRequest {
                id: "missing".to_string(),
                name: "Acme".to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, RepoError::NotFound { ref id, .. } if id == "missing"));
    }
}
