//! Department use-case service.

use crate::model::department::{CreateDepartmentRequest, Department, UpdateDepartmentRequest};
use crate::repo::department_repo::DepartmentRepository;
use crate::repo::RepoResult;

/// Async facade over a department repository.
pub struct DepartmentService<R: DepartmentRepository> {
    repo: R,
}

impl<R: DepartmentRepository> DepartmentService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn create_department(
        &self,
        request: CreateDepartmentRequest,
    ) -> RepoResult<Department> {
        self.repo.create_department(&request)
    }

    pub async fn update_department(
        &self,
        request: UpdateDepartmentRequest,
    ) -> RepoResult<Department> {
        self.repo.update_department(&request)
    }

    /// Does not clear a matching active-department pointer.
    pub async fn delete_department(&self, department_id: &str) -> RepoResult<()> {
        self.repo.delete_department(department_id)
    }

    pub async fn list_departments(&self) -> RepoResult<Vec<Department>> {
        self.repo.list_departments()
    }

    pub async fn list_departments_by_company(
        &self,
        company_id: &str,
    ) -> RepoResult<Vec<Department>> {
        self.repo.list_departments_by_company(company_id)
    }

    pub async fn get_department(&self, department_id: &str) -> RepoResult<Option<Department>> {
        self.repo.get_department(department_id)
    }

    pub async fn get_active_department(&self) -> RepoResult<Option<Department>> {
        self.repo.get_active_department()
    }
}
