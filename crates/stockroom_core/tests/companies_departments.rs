use stockroom_core::{
    CompanyRepository, CreateCompanyRequest, CreateDepartmentRequest, DepartmentRepository,
    EntityKind, MemoryKeyValueStore, RepoError, StoreCompanyRepository,
    StoreDepartmentRepository, UpdateCompanyRequest, UpdateDepartmentRequest, ValidationError,
};
use std::collections::HashSet;

#[test]
fn duplicate_company_name_is_rejected_and_ids_are_unique() {
    let store = MemoryKeyValueStore::new();
    let repo = StoreCompanyRepository::new(&store);

    let acme = repo
        .create_company(&CreateCompanyRequest::new("Acme"))
        .unwrap();
    let err = repo
        .create_company(&CreateCompanyRequest::new("Acme"))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::DuplicateName {
            entity: EntityKind::Company,
            field: "name"
        }
    ));

    let globex = repo
        .create_company(&CreateCompanyRequest::new("Globex"))
        .unwrap();
    let initech = repo
        .create_company(&CreateCompanyRequest::new("Initech"))
        .unwrap();

    let ids: HashSet<_> = [&acme.id, &globex.id, &initech.id].into_iter().collect();
    assert_eq!(ids.len(), 3);
    assert_eq!(repo.list_companies().unwrap().len(), 3);
}

#[test]
fn company_update_checks_other_records_only() {
    let store = MemoryKeyValueStore::new();
    let repo = StoreCompanyRepository::new(&store);
    let acme = repo
        .create_company(&CreateCompanyRequest::new("Acme"))
        .unwrap();
    repo.create_company(&CreateCompanyRequest::new("Globex"))
        .unwrap();

    let same = repo
        .update_company(&UpdateCompanyRequest {
            id: acme.id.clone(),
            name: "Acme".to_string(),
        })
        .unwrap();
    assert_eq!(same, acme);

    let err = repo
        .update_company(&UpdateCompanyRequest {
            id: acme.id.clone(),
            name: "Globex".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, RepoError::DuplicateName { .. }));

    let renamed = repo
        .update_company(&UpdateCompanyRequest {
            id: acme.id.clone(),
            name: "Acme Corp".to_string(),
        })
        .unwrap();
    assert_eq!(
        repo.get_company(&acme.id).unwrap().unwrap().name,
        renamed.name
    );
}

#[test]
fn company_update_unknown_id_is_not_found() {
    let store = MemoryKeyValueStore::new();
    let repo = StoreCompanyRepository::new(&store);

    let err = repo
        .update_company(&UpdateCompanyRequest {
            id: "nope".to_string(),
            name: "Acme".to_string(),
        })
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::NotFound {
            entity: EntityKind::Company,
            ref id
        } if id == "nope"
    ));
}

#[test]
fn short_company_name_fails_validation_without_writing() {
    let store = MemoryKeyValueStore::new();
    let repo = StoreCompanyRepository::new(&store);

    let err = repo
        .create_company(&CreateCompanyRequest::new("A"))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::LengthOutOfRange { actual: 1, .. })
    ));
    assert!(store.is_empty());
}

#[test]
fn department_names_are_unique_per_company() {
    let store = MemoryKeyValueStore::new();
    let repo = StoreDepartmentRepository::new(&store);

    repo.create_department(&CreateDepartmentRequest::new("c1", "Sales"))
        .unwrap();
    repo.create_department(&CreateDepartmentRequest::new("c2", "Sales"))
        .unwrap();

    let err = repo
        .create_department(&CreateDepartmentRequest::new("c1", "Sales"))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::DuplicateName {
            entity: EntityKind::Department,
            field: "name"
        }
    ));
    assert_eq!(repo.list_departments().unwrap().len(), 2);
}

#[test]
fn departments_by_company_preserve_stored_order() {
    let store = MemoryKeyValueStore::new();
    let repo = StoreDepartmentRepository::new(&store);

    let first = repo
        .create_department(&CreateDepartmentRequest::new("c1", "Warehouse"))
        .unwrap();
    repo.create_department(&CreateDepartmentRequest::new("c2", "Finance"))
        .unwrap();
    let second = repo
        .create_department(&CreateDepartmentRequest::new("c1", "Accounting"))
        .unwrap();

    let listed = repo.list_departments_by_company("c1").unwrap();
    assert_eq!(listed, vec![first, second]);
    assert!(repo.list_departments_by_company("c3").unwrap().is_empty());
}

#[test]
fn deleting_company_keeps_its_departments() {
    let store = MemoryKeyValueStore::new();
    let companies = StoreCompanyRepository::new(&store);
    let departments = StoreDepartmentRepository::new(&store);

    let company = companies
        .create_company(&CreateCompanyRequest::new("Acme"))
        .unwrap();
    let department = departments
        .create_department(&CreateDepartmentRequest::new(company.id.clone(), "Sales"))
        .unwrap();

    companies.delete_company(&company.id).unwrap();

    assert!(companies.get_company(&company.id).unwrap().is_none());
    assert_eq!(
        departments.get_department(&department.id).unwrap(),
        Some(department)
    );
}

#[test]
fn delete_is_idempotent() {
    let store = MemoryKeyValueStore::new();
    let repo = StoreDepartmentRepository::new(&store);
    let department = repo
        .create_department(&CreateDepartmentRequest::new("c1", "Sales"))
        .unwrap();

    repo.delete_department(&department.id).unwrap();
    repo.delete_department(&department.id).unwrap();
    repo.delete_department("never-existed").unwrap();

    assert!(repo.list_departments().unwrap().is_empty());
}

#[test]
fn active_company_resolves_existing_and_stale_pointers() {
    let store = MemoryKeyValueStore::new();
    let repo = StoreCompanyRepository::new(&store);
    let company = repo
        .create_company(&CreateCompanyRequest::new("Acme"))
        .unwrap();

    assert!(repo.get_active_company().unwrap().is_none());

    repo.set_active_company(Some(&company.id)).unwrap();
    assert_eq!(repo.get_active_company().unwrap(), Some(company.clone()));

    repo.set_active_company(Some("ghost")).unwrap();
    assert!(repo.get_active_company().unwrap().is_none());

    repo.set_active_company(Some(&company.id)).unwrap();
    repo.delete_company(&company.id).unwrap();
    assert!(repo.get_active_company().unwrap().is_none());

    repo.set_active_company(None).unwrap();
    assert!(repo.get_active_company().unwrap().is_none());
}

#[test]
fn stale_active_department_pointer_is_not_cleared_by_reads() {
    let store = MemoryKeyValueStore::new();
    let repo = StoreDepartmentRepository::new(&store);
    let department = repo
        .create_department(&CreateDepartmentRequest::new("c1", "Sales"))
        .unwrap();
    repo.set_active_department(Some(&department.id)).unwrap();

    repo.delete_department(&department.id).unwrap();
    assert!(repo.get_active_department().unwrap().is_none());

    let restored: Option<String> =
        stockroom_core::storage::read_json(&store, stockroom_core::StorageKey::ActiveDepartment)
            .unwrap();
    assert_eq!(restored, Some(department.id));
}

#[test]
fn renaming_active_department_keeps_it_under_active_company() {
    let store = MemoryKeyValueStore::new();
    let companies = StoreCompanyRepository::new(&store);
    let departments = StoreDepartmentRepository::new(&store);
    let a = companies
        .create_company(&CreateCompanyRequest::new("Company A"))
        .unwrap();
    let b = companies
        .create_company(&CreateCompanyRequest::new("Company B"))
        .unwrap();
    departments
        .create_department(&CreateDepartmentRequest::new(b.id.clone(), "Logistics"))
        .unwrap();
    let purchasing = departments
        .create_department(&CreateDepartmentRequest::new(a.id.clone(), "Purchasing"))
        .unwrap();
    companies.set_active_company(Some(&a.id)).unwrap();
    departments
        .set_active_department(Some(&purchasing.id))
        .unwrap();

    let renamed = departments
        .update_department(&UpdateDepartmentRequest {
            id: purchasing.id.clone(),
            name: "Logistics".to_string(),
        })
        .unwrap();

    assert_eq!(renamed.company_id, a.id);
    let active_company = companies.get_active_company().unwrap().unwrap();
    let active_department = departments.get_active_department().unwrap().unwrap();
    assert_eq!(active_department.company_id, active_company.id);
    assert_eq!(active_department.name, "Logistics");
    assert_eq!(
        departments.list_departments_by_company(&a.id).unwrap(),
        vec![renamed]
    );
}
