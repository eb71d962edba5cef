//! Active company/department selection.
//!
//! # Responsibility
//! - Change the active company and cascade the change to the active
//!   department.
//! - Re-derive the active entities from the repositories after each change.
//!
//! # Invariants
//! - Activating or clearing a company always clears the department
//!   pointer, so a department of another company never stays active.
//! - Department deletion is not observed here; a deleted department that
//!   is still pointed at reads as "no active department".

use crate::model::company::Company;
use crate::model::department::Department;
use crate::repo::company_repo::CompanyRepository;
use crate::repo::department_repo::DepartmentRepository;
use crate::repo::RepoResult;
use log::info;

/// Orchestrates pointer writes across the company and department
/// repositories.
pub struct ActiveSelectionCoordinator<C, D>
where
    C: CompanyRepository,
    D: DepartmentRepository,
{
    companies: C,
    departments: D,
}

impl<C, D> ActiveSelectionCoordinator<C, D>
where
    C: CompanyRepository,
    D: DepartmentRepository,
{
    pub fn new(companies: C, departments: D) -> Self {
        Self {
            companies,
            departments,
        }
    }

    /// Makes `company_id` the active company and clears the active
    /// department.
    ///
    /// Returns the re-derived active company, which is `None` when
    /// `company_id` does not exist.
    pub async fn activate_company(&self, company_id: &str) -> RepoResult<Option<Company>> {
        self.companies.set_active_company(Some(company_id))?;
        self.departments.set_active_department(None)?;
        info!(
            "event=company_activate module=service status=ok company_id={}",
            company_id
        );
        self.companies.get_active_company()
    }

    /// Clears both pointers.
    pub async fn clear_active_company(&self) -> RepoResult<()> {
        self.companies.set_active_company(None)?;
        self.departments.set_active_department(None)?;
        info!("event=company_activate module=service status=ok cleared=true");
        Ok(())
    }

    /// Makes `department_id` the active department. The company pointer is
    /// not touched.
    pub async fn activate_department(&self, department_id: &str) -> RepoResult<Option<Department>> {
        self.departments.set_active_department(Some(department_id))?;
        self.departments.get_active_department()
    }

    pub async fn clear_active_department(&self) -> RepoResult<()> {
        self.departments.set_active_department(None)
    }

    pub async fn active_company(&self) -> RepoResult<Option<Company>> {
        self.companies.get_active_company()
    }

    pub async fn active_department(&self) -> RepoResult<Option<Department>> {
        self.departments.get_active_department()
    }
}
